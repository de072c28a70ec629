//! Core business logic - framework-agnostic validators and reports.
//!
//! Each entity module exposes a `New*` request struct of raw form strings, a `create_*`
//! operation that validates and appends one record, and a `list_*` operation.

pub mod enrollment;
pub mod grade;
pub mod report;
pub mod score;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;
pub mod validation;
