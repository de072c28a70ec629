//! Subject entity - A taught subject and the grades it is offered to.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection subjects are stored in.
pub const COLLECTION: Collection = Collection::Subjects;
/// Uniqueness key, compared case-insensitively.
pub const KEY_FIELD: &str = "name";

/// Subject record as persisted in `subjects.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    /// Grade names the subject is offered to, trimmed, never empty strings
    pub grades: Vec<String>,
    /// Category (e.g., "Science", "Arts")
    pub category: String,
    pub description: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Grades: {}, Category: {}, Desc: {}",
            self.name,
            self.grades.join(", "),
            self.category,
            self.description
        )
    }
}
