//! Grade entity - A class level with its form teacher and seat capacity.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection grades are stored in.
pub const COLLECTION: Collection = Collection::Grades;
/// Uniqueness key, compared case-sensitively.
pub const KEY_FIELD: &str = "name";

/// Grade record as persisted in `grades.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Grade name (e.g., "9", "10A"), unique across grades
    pub name: String,
    pub description: String,
    /// Level label (e.g., "Junior", "Senior")
    pub level: String,
    /// Teacher id of the class teacher
    pub class_teacher: String,
    /// Maximum number of students
    pub capacity: i64,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Desc: {}, Level: {}, Class Teacher: {}, Capacity: {}",
            self.name, self.description, self.level, self.class_teacher, self.capacity
        )
    }
}
