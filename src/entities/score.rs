//! Score entity - One mark for one student in one subject.
//!
//! Scores carry no uniqueness key; the same student, subject and teacher may repeat.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection scores are stored in.
pub const COLLECTION: Collection = Collection::Scores;

/// Score record as persisted in `scores.json`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub student_id: String,
    pub subject: String,
    pub teacher_id: String,
    pub score: f64,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}, Subject: {}, Teacher ID: {}, Score: {}",
            self.student_id,
            self.subject,
            self.teacher_id,
            format_score(self.score)
        )
    }
}

/// Formats a score for display.
///
/// Integral values keep one decimal place (`80.0`), everything else prints in
/// shortest form (`72.5`).
#[must_use]
pub fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
