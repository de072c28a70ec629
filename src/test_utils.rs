//! Shared test utilities for `school-records`.
//!
//! This module provides helpers for setting up isolated stores and building form
//! input with sensible defaults, so each test only spells out the fields it cares about.

use crate::{
    core::{
        enrollment::NewEnrollment, grade::NewGrade, score::NewScore, student::NewStudent,
        subject::NewSubject, teacher::NewTeacher, user::NewUser,
    },
    errors::Result,
    store::JsonFileStore,
};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a JSON file store over a fresh temporary directory.
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn setup_test_store() -> Result<(TempDir, JsonFileStore)> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path());
    Ok((dir, store))
}

/// Student input with every field filled.
///
/// # Defaults
/// * `name`: `"Student {id}"`
/// * dates: `2010-01-01` (dob), `2024-09-01` (registered)
#[must_use]
pub fn new_student(student_id: &str, grade: &str) -> NewStudent {
    NewStudent {
        student_id: student_id.to_string(),
        name: format!("Student {student_id}"),
        grade: grade.to_string(),
        dob: "2010-01-01".to_string(),
        gender: "F".to_string(),
        phone: "555-0100".to_string(),
        address: "1 School Lane".to_string(),
        email: format!("{}@example.org", student_id.to_lowercase()),
        guardian_name: "Pat Guardian".to_string(),
        guardian_phone: "555-0199".to_string(),
        registered_at: "2024-09-01".to_string(),
    }
}

#[must_use]
pub fn new_teacher(teacher_id: &str) -> NewTeacher {
    NewTeacher {
        teacher_id: teacher_id.to_string(),
        name: format!("Teacher {teacher_id}"),
        age: "41".to_string(),
        dob: "1983-05-12".to_string(),
        gender: "M".to_string(),
        phone: "555-0142".to_string(),
        salary: "52000".to_string(),
        employment_date: "2015-08-20".to_string(),
        courses: "Math,Physics".to_string(),
    }
}

#[must_use]
pub fn new_grade(name: &str, capacity: &str) -> NewGrade {
    NewGrade {
        name: name.to_string(),
        description: format!("Grade {name} homeroom"),
        level: "Junior".to_string(),
        class_teacher: "T1".to_string(),
        capacity: capacity.to_string(),
    }
}

#[must_use]
pub fn new_subject(name: &str) -> NewSubject {
    NewSubject {
        name: name.to_string(),
        grades: "9,10".to_string(),
        category: "Science".to_string(),
        description: format!("{name} core course"),
    }
}

#[must_use]
pub fn new_score(student_id: &str, subject: &str, score: &str) -> NewScore {
    NewScore {
        student_id: student_id.to_string(),
        subject: subject.to_string(),
        teacher_id: "T1".to_string(),
        score: score.to_string(),
    }
}

#[must_use]
pub fn new_enrollment(student_id: &str, grade: &str, status: &str) -> NewEnrollment {
    NewEnrollment {
        student_id: student_id.to_string(),
        grade: grade.to_string(),
        status: status.to_string(),
    }
}

/// User input; the password is `"changeme"`.
#[must_use]
pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "changeme".to_string(),
        role: "admin".to_string(),
        full_name: format!("User {username}"),
        created_at: "2024-09-01".to_string(),
    }
}
