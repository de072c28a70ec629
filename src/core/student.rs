//! Student business logic - registering and listing students.

use super::validation::{KeyMatch, UniqueKey, append_checked, require_fields};
use crate::{
    entities::{StudentModel, student},
    errors::Result,
    store::RecordStore,
};

/// Raw form input for a new student.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub student_id: String,
    pub name: String,
    pub grade: String,
    pub dob: String,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub registered_at: String,
}

impl NewStudent {
    fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("student_id", self.student_id.as_str()),
            ("name", self.name.as_str()),
            ("grade", self.grade.as_str()),
            ("dob", self.dob.as_str()),
            ("gender", self.gender.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("email", self.email.as_str()),
            ("guardian_name", self.guardian_name.as_str()),
            ("guardian_phone", self.guardian_phone.as_str()),
            ("registered_at", self.registered_at.as_str()),
        ]
    }
}

/// Validates and stores a new student.
///
/// Every field is required. `student_id` must not already be taken (case-sensitive).
pub fn create_student<S: RecordStore>(store: &S, input: &NewStudent) -> Result<StudentModel> {
    require_fields(&input.fields())?;

    let model = StudentModel {
        student_id: input.student_id.trim().to_string(),
        name: input.name.trim().to_string(),
        grade: input.grade.trim().to_string(),
        dob: input.dob.trim().to_string(),
        gender: input.gender.trim().to_string(),
        phone: input.phone.trim().to_string(),
        address: input.address.trim().to_string(),
        email: input.email.trim().to_string(),
        guardian_name: input.guardian_name.trim().to_string(),
        guardian_phone: input.guardian_phone.trim().to_string(),
        registered_at: input.registered_at.trim().to_string(),
    };

    append_checked(
        store,
        student::COLLECTION,
        &model,
        Some(UniqueKey {
            field: student::KEY_FIELD,
            value: &model.student_id,
            matching: KeyMatch::CaseSensitive,
        }),
    )?;
    Ok(model)
}

/// All students in registration order.
pub fn list_students<S: RecordStore>(store: &S) -> Result<Vec<StudentModel>> {
    store.load(student::COLLECTION)
}
