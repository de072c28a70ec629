//! Teacher business logic.

use super::validation::{KeyMatch, UniqueKey, append_checked, require_fields};
use crate::{
    entities::{TeacherModel, teacher},
    errors::Result,
    store::RecordStore,
};

/// Raw form input for a new teacher.
#[derive(Debug, Clone, Default)]
pub struct NewTeacher {
    pub teacher_id: String,
    pub name: String,
    pub age: String,
    pub dob: String,
    pub gender: String,
    pub phone: String,
    pub salary: String,
    pub employment_date: String,
    /// Comma-separated course names, stored as entered
    pub courses: String,
}

impl NewTeacher {
    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            (teacher::KEY_FIELD, self.teacher_id.as_str()),
            ("name", self.name.as_str()),
            ("age", self.age.as_str()),
            ("dob", self.dob.as_str()),
            ("gender", self.gender.as_str()),
            ("phone", self.phone.as_str()),
            ("salary", self.salary.as_str()),
            ("employment_date", self.employment_date.as_str()),
            ("courses", self.courses.as_str()),
        ]
    }
}

/// Validates and stores a new teacher. `Teacher_id` is unique, case-sensitive.
pub fn create_teacher<S: RecordStore>(store: &S, input: &NewTeacher) -> Result<TeacherModel> {
    require_fields(&input.fields())?;

    let model = TeacherModel {
        teacher_id: input.teacher_id.trim().to_string(),
        name: input.name.trim().to_string(),
        age: input.age.trim().to_string(),
        dob: input.dob.trim().to_string(),
        gender: input.gender.trim().to_string(),
        phone: input.phone.trim().to_string(),
        salary: input.salary.trim().to_string(),
        employment_date: input.employment_date.trim().to_string(),
        courses: input.courses.trim().to_string(),
    };

    append_checked(
        store,
        teacher::COLLECTION,
        &model,
        Some(UniqueKey {
            field: teacher::KEY_FIELD,
            value: &model.teacher_id,
            matching: KeyMatch::CaseSensitive,
        }),
    )?;
    Ok(model)
}

pub fn list_teachers<S: RecordStore>(store: &S) -> Result<Vec<TeacherModel>> {
    store.load(teacher::COLLECTION)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        entities::RecordExt, errors::ValidationKind, store::MemoryStore, test_utils::new_teacher,
    };

    #[test]
    fn test_courses_stored_unsplit() -> Result<()> {
        let store = MemoryStore::new();
        let mut input = new_teacher("T1");
        input.courses = "Math, Physics".to_string();

        create_teacher(&store, &input)?;

        let stored = store.load_records(teacher::COLLECTION)?;
        assert_eq!(stored[0].text("courses").as_deref(), Some("Math, Physics"));
        assert_eq!(stored[0].text("Teacher_id").as_deref(), Some("T1"));
        Ok(())
    }

    #[test]
    fn test_duplicate_teacher_id() -> Result<()> {
        let store = MemoryStore::new();
        create_teacher(&store, &new_teacher("T1"))?;

        let err = create_teacher(&store, &new_teacher("T1")).unwrap_err();

        assert_eq!(err.validation_kind(), Some(ValidationKind::DuplicateKey));
        assert_eq!(err.to_string(), "duplicate key: Teacher_id 'T1' already exists");
        assert_eq!(list_teachers(&store)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_teacher_id_uses_stored_field_name() {
        let store = MemoryStore::new();
        let err = create_teacher(&store, &new_teacher("")).unwrap_err();
        assert_eq!(err.to_string(), "missing field: Teacher_id");
    }
}
