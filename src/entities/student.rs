//! Student entity - One enrolled pupil.
//!
//! `grade` is free text. It is meant to name a Grade record but nothing enforces that.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection students are stored in.
pub const COLLECTION: Collection = Collection::Students;
/// Uniqueness key, compared case-sensitively.
pub const KEY_FIELD: &str = "student_id";

/// Student record as persisted in `students.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// School-assigned identifier, unique across students
    pub student_id: String,
    /// Full name
    pub name: String,
    /// Grade the student is in (e.g., "9")
    pub grade: String,
    /// Date of birth, `YYYY-MM-DD` by convention
    pub dob: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    /// Registration date, `YYYY-MM-DD` by convention
    pub registered_at: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Grade: {}, Registered: {}",
            self.student_id, self.name, self.grade, self.registered_at
        )
    }
}
