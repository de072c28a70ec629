//! Enrollment business logic - registering a student into a grade.
//!
//! Enrollments are checked against the student collection at creation time only.
//! Nothing re-validates them afterwards.

use super::validation::{append_checked, require_fields};
use crate::{
    entities::{EnrollmentModel, Record, RecordExt, enrollment, student},
    errors::{Error, Result, ValidationKind},
    store::RecordStore,
};
use chrono::{Local, NaiveDate};

/// Raw form input for a new enrollment.
#[derive(Debug, Clone, Default)]
pub struct NewEnrollment {
    pub student_id: String,
    pub grade: String,
    /// Free text, e.g. "active", "transferred", "graduated"
    pub status: String,
}

impl NewEnrollment {
    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("student_id", self.student_id.as_str()),
            ("grade", self.grade.as_str()),
            ("status", self.status.as_str()),
        ]
    }
}

/// Returns true if any stored student has `student_id`.
#[must_use]
pub fn student_exists(students: &[Record], student_id: &str) -> bool {
    students
        .iter()
        .any(|s| s.text(student::KEY_FIELD).as_deref() == Some(student_id))
}

/// Returns true if any stored student is in `grade`.
///
/// Grade existence is decided by the grades students are in, not by the Grade
/// collection. A grade with no students yet cannot take enrollments.
#[must_use]
pub fn grade_in_use_by_students(students: &[Record], grade: &str) -> bool {
    students
        .iter()
        .any(|s| s.text("grade").as_deref() == Some(grade))
}

/// Validates and stores an enrollment stamped with today's local date.
pub fn create_enrollment<S: RecordStore>(
    store: &S,
    input: &NewEnrollment,
    academic_year: &str,
) -> Result<EnrollmentModel> {
    create_enrollment_on(store, input, academic_year, Local::now().date_naive())
}

/// Same as [`create_enrollment`] with an explicit enrollment date.
pub fn create_enrollment_on<S: RecordStore>(
    store: &S,
    input: &NewEnrollment,
    academic_year: &str,
    enroll_date: NaiveDate,
) -> Result<EnrollmentModel> {
    require_fields(&input.fields())?;
    let student_id = input.student_id.trim();
    let grade = input.grade.trim();

    let students = store.load_records(student::COLLECTION)?;
    if !student_exists(&students, student_id) {
        return Err(Error::validation(
            ValidationKind::UnknownStudent,
            format!("no student with student_id '{student_id}'"),
        ));
    }
    if !grade_in_use_by_students(&students, grade) {
        return Err(Error::validation(
            ValidationKind::UnknownGrade,
            format!("no student is in grade '{grade}'"),
        ));
    }

    let model = EnrollmentModel {
        student_id: student_id.to_string(),
        grade: grade.to_string(),
        enroll_date: enroll_date.format("%Y-%m-%d").to_string(),
        academic_year: academic_year.to_string(),
        status: input.status.trim().to_string(),
    };

    append_checked(store, enrollment::COLLECTION, &model, None)?;
    Ok(model)
}

pub fn list_enrollments<S: RecordStore>(store: &S) -> Result<Vec<EnrollmentModel>> {
    store.load(enrollment::COLLECTION)
}
