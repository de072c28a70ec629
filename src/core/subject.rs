//! Subject business logic.
//!
//! Subject names collide case-insensitively ("Math" blocks "math"), unlike every other
//! keyed entity. The comma-separated grade list is split into a trimmed list on save.

use super::validation::{KeyMatch, UniqueKey, append_checked, require_fields};
use crate::{
    entities::{SubjectModel, subject},
    errors::{Error, Result, ValidationKind},
    store::RecordStore,
};

/// Raw form input for a new subject.
#[derive(Debug, Clone, Default)]
pub struct NewSubject {
    pub name: String,
    /// Comma-separated grade names, e.g. "9, 10, 11"
    pub grades: String,
    pub category: String,
    pub description: String,
}

impl NewSubject {
    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("grades", self.grades.as_str()),
            ("category", self.category.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn split_grades(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates and stores a new subject.
///
/// A grade list made only of separators (", ,") counts as a missing `grades` field.
pub fn create_subject<S: RecordStore>(store: &S, input: &NewSubject) -> Result<SubjectModel> {
    require_fields(&input.fields())?;
    let grades = split_grades(&input.grades);
    if grades.is_empty() {
        return Err(Error::validation(ValidationKind::MissingField, "grades"));
    }

    let model = SubjectModel {
        name: input.name.trim().to_string(),
        grades,
        category: input.category.trim().to_string(),
        description: input.description.trim().to_string(),
    };

    append_checked(
        store,
        subject::COLLECTION,
        &model,
        Some(UniqueKey {
            field: subject::KEY_FIELD,
            value: &model.name,
            matching: KeyMatch::CaseInsensitive,
        }),
    )?;
    Ok(model)
}

pub fn list_subjects<S: RecordStore>(store: &S) -> Result<Vec<SubjectModel>> {
    store.load(subject::COLLECTION)
}
