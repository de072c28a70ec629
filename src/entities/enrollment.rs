//! Enrollment entity - A student's registration in a grade for an academic year.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection enrollments are stored in.
pub const COLLECTION: Collection = Collection::Enrollments;

/// Academic year stamped on enrollments unless configured otherwise.
pub const DEFAULT_ACADEMIC_YEAR: &str = "2024-2025";

/// Enrollment record as persisted in `enrollments.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Id of an existing student at the time of enrollment
    pub student_id: String,
    pub grade: String,
    /// Date the record was created, `YYYY-MM-DD`
    pub enroll_date: String,
    pub academic_year: String,
    /// Free text status (e.g., "active", "transferred", "graduated")
    pub status: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}, Grade: {}, Year: {}, Status: {}, Enrolled: {}",
            self.student_id, self.grade, self.academic_year, self.status, self.enroll_date
        )
    }
}
