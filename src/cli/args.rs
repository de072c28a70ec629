//! Command-line argument definitions using clap
//!
//! Commands:
//! - school-records add <entity> --field value ...
//! - school-records list <entity>
//! - school-records report <kind|all>
//!
//! Every `add` flag defaults to the empty string so that an omitted field reaches the
//! validators and is reported as a missing field.

use crate::{
    core::{
        enrollment::NewEnrollment, grade::NewGrade, report::ReportKind, score::NewScore,
        student::NewStudent, subject::NewSubject, teacher::NewTeacher, user::NewUser,
    },
    entities::Collection,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// School records - students, staff, grades and scores kept in JSON files
#[derive(Parser, Debug)]
#[command(name = "school-records")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (defaults to $SCHOOL_CONFIG or ./school.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory, overriding the config file and $SCHOOL_DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate and append one record
    #[command(subcommand)]
    Add(AddCommand),

    /// Print every record of a collection
    List {
        /// Collection name, singular or plural (e.g. `student` or `students`)
        entity: Collection,
    },

    /// Print a dashboard report
    Report {
        #[arg(value_enum)]
        kind: ReportArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Register a student
    Student(StudentArgs),
    /// Register a teacher
    Teacher(TeacherArgs),
    /// Create a grade (class)
    Grade(GradeArgs),
    /// Create a subject
    Subject(SubjectArgs),
    /// Record a score
    Score(ScoreArgs),
    /// Enroll an existing student
    Enrollment(EnrollmentArgs),
    /// Create a user account
    User(UserArgs),
}

impl AddCommand {
    /// The collection this command appends to.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Student(_) => Collection::Students,
            Self::Teacher(_) => Collection::Teachers,
            Self::Grade(_) => Collection::Grades,
            Self::Subject(_) => Collection::Subjects,
            Self::Score(_) => Collection::Scores,
            Self::Enrollment(_) => Collection::Enrollments,
            Self::User(_) => Collection::Users,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct StudentArgs {
    #[arg(long, default_value = "")]
    pub student_id: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub grade: String,
    #[arg(long, default_value = "")]
    pub dob: String,
    #[arg(long, default_value = "")]
    pub gender: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub guardian_name: String,
    #[arg(long, default_value = "")]
    pub guardian_phone: String,
    #[arg(long, default_value = "")]
    pub registered_at: String,
}

impl From<StudentArgs> for NewStudent {
    fn from(args: StudentArgs) -> Self {
        Self {
            student_id: args.student_id,
            name: args.name,
            grade: args.grade,
            dob: args.dob,
            gender: args.gender,
            phone: args.phone,
            address: args.address,
            email: args.email,
            guardian_name: args.guardian_name,
            guardian_phone: args.guardian_phone,
            registered_at: args.registered_at,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TeacherArgs {
    #[arg(long, default_value = "")]
    pub teacher_id: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub age: String,
    #[arg(long, default_value = "")]
    pub dob: String,
    #[arg(long, default_value = "")]
    pub gender: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub salary: String,
    #[arg(long, default_value = "")]
    pub employment_date: String,
    /// Comma-separated course list, stored as given
    #[arg(long, default_value = "")]
    pub courses: String,
}

impl From<TeacherArgs> for NewTeacher {
    fn from(args: TeacherArgs) -> Self {
        Self {
            teacher_id: args.teacher_id,
            name: args.name,
            age: args.age,
            dob: args.dob,
            gender: args.gender,
            phone: args.phone,
            salary: args.salary,
            employment_date: args.employment_date,
            courses: args.courses,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct GradeArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub level: String,
    #[arg(long, default_value = "")]
    pub class_teacher: String,
    /// Whole number of seats
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub capacity: String,
}

impl From<GradeArgs> for NewGrade {
    fn from(args: GradeArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            level: args.level,
            class_teacher: args.class_teacher,
            capacity: args.capacity,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubjectArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Comma-separated grade names
    #[arg(long, default_value = "")]
    pub grades: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

impl From<SubjectArgs> for NewSubject {
    fn from(args: SubjectArgs) -> Self {
        Self {
            name: args.name,
            grades: args.grades,
            category: args.category,
            description: args.description,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    #[arg(long, default_value = "")]
    pub student_id: String,
    #[arg(long, default_value = "")]
    pub subject: String,
    #[arg(long, default_value = "")]
    pub teacher_id: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub score: String,
}

impl From<ScoreArgs> for NewScore {
    fn from(args: ScoreArgs) -> Self {
        Self {
            student_id: args.student_id,
            subject: args.subject,
            teacher_id: args.teacher_id,
            score: args.score,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct EnrollmentArgs {
    #[arg(long, default_value = "")]
    pub student_id: String,
    #[arg(long, default_value = "")]
    pub grade: String,
    #[arg(long, default_value = "")]
    pub status: String,
}

impl From<EnrollmentArgs> for NewEnrollment {
    fn from(args: EnrollmentArgs) -> Self {
        Self {
            student_id: args.student_id,
            grade: args.grade,
            status: args.status,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct UserArgs {
    #[arg(long, default_value = "")]
    pub username: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub role: String,
    #[arg(long, default_value = "")]
    pub full_name: String,
    #[arg(long, default_value = "")]
    pub created_at: String,
}

impl From<UserArgs> for NewUser {
    fn from(args: UserArgs) -> Self {
        Self {
            username: args.username,
            password: args.password,
            role: args.role,
            full_name: args.full_name,
            created_at: args.created_at,
        }
    }
}

/// Report selector on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportArg {
    StudentCountByGrade,
    AverageScorePerSubject,
    TeacherAssignment,
    EnrollmentStatus,
    CapacityVsActual,
    StudentsByGrade,
    StudentReportCard,
    Totals,
    /// Every report, in dashboard order
    All,
}

impl ReportArg {
    /// The single report selected, or `None` for `all`.
    #[must_use]
    pub const fn kind(self) -> Option<ReportKind> {
        match self {
            Self::StudentCountByGrade => Some(ReportKind::StudentCountByGrade),
            Self::AverageScorePerSubject => Some(ReportKind::AverageScorePerSubject),
            Self::TeacherAssignment => Some(ReportKind::TeacherAssignment),
            Self::EnrollmentStatus => Some(ReportKind::EnrollmentStatus),
            Self::CapacityVsActual => Some(ReportKind::CapacityVsActual),
            Self::StudentsByGrade => Some(ReportKind::StudentsByGrade),
            Self::StudentReportCard => Some(ReportKind::StudentReportCard),
            Self::Totals => Some(ReportKind::Totals),
            Self::All => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_student() {
        let cli = Cli::try_parse_from([
            "school-records",
            "add",
            "student",
            "--student-id",
            "S1",
            "--grade",
            "10",
        ])
        .unwrap();

        let Command::Add(AddCommand::Student(args)) = cli.command else {
            panic!("expected add student");
        };
        assert_eq!(args.student_id, "S1");
        assert_eq!(args.grade, "10");
        // Omitted flags become empty strings
        assert_eq!(args.name, "");
    }

    #[test]
    fn test_parse_list_accepts_singular_and_plural() {
        for name in ["teacher", "Teachers"] {
            let cli = Cli::try_parse_from(["school-records", "list", name]).unwrap();
            assert!(matches!(
                cli.command,
                Command::List {
                    entity: Collection::Teachers
                }
            ));
        }
        assert!(Cli::try_parse_from(["school-records", "list", "parents"]).is_err());
    }

    #[test]
    fn test_parse_report_and_global_flags() {
        let cli = Cli::try_parse_from([
            "school-records",
            "report",
            "enrollment-status",
            "--data-dir",
            "/tmp/school",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/school")));
        let Command::Report { kind } = cli.command else {
            panic!("expected report");
        };
        assert_eq!(kind.kind(), Some(ReportKind::EnrollmentStatus));
    }

    #[test]
    fn test_report_all_selects_nothing_single() {
        assert_eq!(ReportArg::All.kind(), None);
        let cli = Cli::try_parse_from(["school-records", "report", "all"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Report {
                kind: ReportArg::All
            }
        ));
    }

    #[test]
    fn test_teacher_args_convert() {
        let cli = Cli::try_parse_from([
            "school-records",
            "add",
            "teacher",
            "--teacher-id",
            "T9",
            "--courses",
            "Math,Art",
        ])
        .unwrap();
        let Command::Add(add) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(add.collection(), Collection::Teachers);
        let AddCommand::Teacher(args) = add else {
            panic!("expected teacher");
        };
        let input = NewTeacher::from(args);
        assert_eq!(input.teacher_id, "T9");
        assert_eq!(input.courses, "Math,Art");
    }

    #[test]
    fn test_negative_numbers_reach_the_validator() {
        let cli = Cli::try_parse_from([
            "school-records", "add", "score", "--score", "-5", "--subject", "Math",
        ])
        .unwrap();
        let Command::Add(AddCommand::Score(args)) = cli.command else {
            panic!("expected add score");
        };
        assert_eq!(args.score, "-5");
        assert_eq!(args.subject, "Math");

        let cli = Cli::try_parse_from([
            "school-records", "add", "grade", "--capacity", "-1", "--name", "9",
        ])
        .unwrap();
        let Command::Add(AddCommand::Grade(args)) = cli.command else {
            panic!("expected add grade");
        };
        assert_eq!(args.capacity, "-1");
    }
}
