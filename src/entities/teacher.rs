//! Teacher entity - Staff member with the courses they teach.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection teachers are stored in.
pub const COLLECTION: Collection = Collection::Teachers;
/// Uniqueness key. The capitalised spelling is what existing files use.
pub const KEY_FIELD: &str = "Teacher_id";

/// Teacher record as persisted in `teachers.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Staff identifier, unique across teachers
    #[serde(rename = "Teacher_id")]
    pub teacher_id: String,
    pub name: String,
    /// Age as entered; not coerced
    pub age: String,
    pub dob: String,
    pub gender: String,
    pub phone: String,
    /// Salary as entered; not coerced
    pub salary: String,
    pub employment_date: String,
    /// Raw comma-joined course list, kept unsplit
    pub courses: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Salary: {}, Courses: {}",
            self.teacher_id, self.name, self.age, self.salary, self.courses
        )
    }
}
