//! Grade business logic - class levels and their capacities.
//!
//! `capacity` arrives as text and is stored as an integer.

use super::validation::{KeyMatch, UniqueKey, append_checked, parse_integer, require_fields};
use crate::{
    entities::{GradeModel, grade},
    errors::Result,
    store::RecordStore,
};

/// Raw form input for a new grade.
#[derive(Debug, Clone, Default)]
pub struct NewGrade {
    pub name: String,
    pub description: String,
    pub level: String,
    pub class_teacher: String,
    pub capacity: String,
}

impl NewGrade {
    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
            ("level", self.level.as_str()),
            ("class_teacher", self.class_teacher.as_str()),
            ("capacity", self.capacity.as_str()),
        ]
    }
}

/// Validates and stores a new grade.
///
/// Fails with `type mismatch` when `capacity` is not a whole number, and with
/// `duplicate key` when a grade of the same name (case-sensitive) exists.
pub fn create_grade<S: RecordStore>(store: &S, input: &NewGrade) -> Result<GradeModel> {
    require_fields(&input.fields())?;
    let capacity = parse_integer("capacity", &input.capacity)?;

    let model = GradeModel {
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        level: input.level.trim().to_string(),
        class_teacher: input.class_teacher.trim().to_string(),
        capacity,
    };

    append_checked(
        store,
        grade::COLLECTION,
        &model,
        Some(UniqueKey {
            field: grade::KEY_FIELD,
            value: &model.name,
            matching: KeyMatch::CaseSensitive,
        }),
    )?;
    Ok(model)
}

pub fn list_grades<S: RecordStore>(store: &S) -> Result<Vec<GradeModel>> {
    store.load(grade::COLLECTION)
}
