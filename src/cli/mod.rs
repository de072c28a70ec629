//! CLI layer - argument parsing and command dispatch
//!
//! Provides the command-line interface for:
//! - add: validate and append one record
//! - list: print a collection
//! - report: print one dashboard report, or all of them

mod args;
mod commands;

pub use args::{
    AddCommand, Cli, Command, EnrollmentArgs, GradeArgs, ReportArg, ScoreArgs, StudentArgs,
    SubjectArgs, TeacherArgs, UserArgs,
};
pub use commands::{list_collection, run_command};
