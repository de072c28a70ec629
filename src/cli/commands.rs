//! Command implementations - thin dispatch from parsed arguments into the core.
//!
//! Each command returns the text to print on stdout. Errors bubble up unchanged so
//! `main` can print them and set the exit status.

use super::args::{AddCommand, Command};
use crate::{
    core::{enrollment, grade, report, score, student, subject, teacher, user},
    entities::Collection,
    errors::Result,
    store::RecordStore,
};
use std::fmt::Display;
use tracing::debug;

/// Runs one parsed command against `store`.
///
/// `academic_year` is stamped on new enrollments.
pub fn run_command<S: RecordStore>(
    command: Command,
    store: &S,
    academic_year: &str,
) -> Result<String> {
    match command {
        Command::Add(add) => add_record(add, store, academic_year),
        Command::List { entity } => list_collection(entity, store),
        Command::Report { kind } => {
            debug!("Rendering report {:?}", kind);
            kind.kind()
                .map_or_else(|| report::render_all(store), |kind| kind.render(store))
        }
    }
}

fn add_record<S: RecordStore>(add: AddCommand, store: &S, academic_year: &str) -> Result<String> {
    let collection = add.collection();
    match add {
        AddCommand::Student(args) => {
            student::create_student(store, &args.into())?;
        }
        AddCommand::Teacher(args) => {
            teacher::create_teacher(store, &args.into())?;
        }
        AddCommand::Grade(args) => {
            grade::create_grade(store, &args.into())?;
        }
        AddCommand::Subject(args) => {
            subject::create_subject(store, &args.into())?;
        }
        AddCommand::Score(args) => {
            score::create_score(store, &args.into())?;
        }
        AddCommand::Enrollment(args) => {
            enrollment::create_enrollment(store, &args.into(), academic_year)?;
        }
        AddCommand::User(args) => {
            user::create_user(store, &args.into())?;
        }
    }
    Ok(format!("{} added successfully.", capitalize(collection.singular())))
}

/// Renders one display line per record, or a placeholder for an empty collection.
pub fn list_collection<S: RecordStore>(collection: Collection, store: &S) -> Result<String> {
    let lines = match collection {
        Collection::Students => lines(student::list_students(store)?),
        Collection::Teachers => lines(teacher::list_teachers(store)?),
        Collection::Grades => lines(grade::list_grades(store)?),
        Collection::Subjects => lines(subject::list_subjects(store)?),
        Collection::Scores => lines(score::list_scores(store)?),
        Collection::Enrollments => lines(enrollment::list_enrollments(store)?),
        Collection::Users => lines(user::list_users(store)?),
    };
    if lines.is_empty() {
        return Ok(format!("No {} records found.", collection.singular()));
    }
    Ok(lines.join("\n"))
}

fn lines<T: Display>(models: Vec<T>) -> Vec<String> {
    models.iter().map(ToString::to_string).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        cli::Cli,
        errors::{Error, ValidationKind},
        store::MemoryStore,
        test_utils::{init_test_tracing, setup_test_store},
    };
    use clap::Parser;

    fn run(store: &MemoryStore, argv: &[&str]) -> Result<String> {
        let mut full = vec!["school-records"];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full).unwrap();
        run_command(cli.command, store, "2024-2025")
    }

    #[test]
    fn test_add_student_confirms() {
        init_test_tracing();
        let store = MemoryStore::new();

        let out = run(
            &store,
            &[
                "add", "student", "--student-id", "S1", "--name", "Ann", "--grade", "10",
                "--dob", "2010-01-01", "--gender", "F", "--phone", "1", "--address", "x",
                "--email", "a@b", "--guardian-name", "G", "--guardian-phone", "2",
                "--registered-at", "2024-09-01",
            ],
        )
        .unwrap();

        assert_eq!(out, "Student added successfully.");
        assert_eq!(
            run(&store, &["list", "students"]).unwrap(),
            "ID: S1, Name: Ann, Grade: 10, Registered: 2024-09-01"
        );
    }

    #[test]
    fn test_add_with_omitted_flag_reports_missing_field() {
        let store = MemoryStore::new();
        let err = run(&store, &["add", "score", "--student-id", "S1"]).unwrap_err();

        assert_eq!(err.validation_kind(), Some(ValidationKind::MissingField));
        assert_eq!(err.to_string(), "missing field: subject");
    }

    #[test]
    fn test_enrollment_uses_configured_year() {
        let store = MemoryStore::new();
        student::create_student(&store, &crate::test_utils::new_student("S1", "10")).unwrap();

        let cli = Cli::try_parse_from([
            "school-records",
            "add",
            "enrollment",
            "--student-id",
            "S1",
            "--grade",
            "10",
            "--status",
            "active",
        ])
        .unwrap();
        let out = run_command(cli.command, &store, "2030-2031").unwrap();
        assert_eq!(out, "Enrollment added successfully.");

        let listed = enrollment::list_enrollments(&store).unwrap();
        assert_eq!(listed[0].academic_year, "2030-2031");
    }

    #[test]
    fn test_list_empty_collection() {
        let store = MemoryStore::new();
        assert_eq!(
            run(&store, &["list", "user"]).unwrap(),
            "No user records found."
        );
    }

    #[test]
    fn test_report_dispatch() {
        let store = MemoryStore::new();
        let out = run(&store, &["report", "totals"]).unwrap();
        assert_eq!(out, report::ReportKind::Totals.render(&store).unwrap());

        let all = run(&store, &["report", "all"]).unwrap();
        assert!(all.starts_with("== Student Count by Grade =="));
    }

    #[test]
    fn test_duplicate_over_json_store() -> Result<()> {
        let (_dir, store) = setup_test_store()?;
        let argv = ["school-records", "add", "user", "--username", "admin", "--password", "pw",
            "--role", "admin", "--full-name", "Admin", "--created-at", "2024-09-01"];

        let first = run_command(Cli::try_parse_from(argv).unwrap().command, &store, "2024-2025")?;
        assert_eq!(first, "User added successfully.");

        let err = run_command(Cli::try_parse_from(argv).unwrap().command, &store, "2024-2025")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                kind: ValidationKind::DuplicateKey,
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("enrollment"), "Enrollment");
        assert_eq!(capitalize(""), "");
    }
}
