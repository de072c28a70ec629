//! Entity module - Contains the record definitions for every school collection.
//! Each entity has a typed Model struct whose serde field names match the JSON files,
//! plus the `Collection` it lives in. Untyped access goes through `Record`.

pub mod enrollment;
pub mod grade;
pub mod score;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// Re-export specific types to avoid conflicts
pub use enrollment::Model as EnrollmentModel;
pub use grade::Model as GradeModel;
pub use score::Model as ScoreModel;
pub use student::Model as StudentModel;
pub use subject::Model as SubjectModel;
pub use teacher::Model as TeacherModel;
pub use user::Model as UserModel;

/// One stored entity instance: a flat mapping of field name to value.
pub type Record = Map<String, Value>;

/// The named collections, one backing file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Teachers,
    Grades,
    Subjects,
    Scores,
    Enrollments,
    Users,
}

impl Collection {
    /// Every collection, in dashboard order.
    pub const ALL: [Self; 7] = [
        Self::Students,
        Self::Teachers,
        Self::Grades,
        Self::Subjects,
        Self::Scores,
        Self::Enrollments,
        Self::Users,
    ];

    /// Collection name as used in messages and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
            Self::Grades => "grades",
            Self::Subjects => "subjects",
            Self::Scores => "scores",
            Self::Enrollments => "enrollments",
            Self::Users => "users",
        }
    }

    /// Backing file name inside the data directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// Singular noun used in listings, e.g. "No student records found."
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Students => "student",
            Self::Teachers => "teacher",
            Self::Grades => "grade",
            Self::Subjects => "subject",
            Self::Scores => "score",
            Self::Enrollments => "enrollment",
            Self::Users => "user",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted || c.singular() == wanted)
            .ok_or_else(|| format!("unknown collection '{s}'"))
    }
}

/// Lenient field access over untyped records.
///
/// Reports and uniqueness checks read collections this way so that a record missing
/// a field, or holding a number where text was expected, never aborts the scan.
pub trait RecordExt {
    /// The field rendered as text, or `None` if it is absent or null.
    fn text(&self, field: &str) -> Option<String>;

    /// The field as a number. Numeric strings are parsed.
    fn number(&self, field: &str) -> Option<f64>;
}

impl RecordExt for Record {
    fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.is_f64() => n.as_f64().map(score::format_score),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }

    fn number(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}
