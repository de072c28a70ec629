//! Report generation business logic.
//!
//! Every report loads one or two collections, folds them into a grouped summary and
//! renders plain text. Groups keep first-seen order. Reports read records untyped and
//! never fail on a missing field: labels fall back to `"Unknown"` and numbers to `0`.
//! Only storage errors propagate.

use crate::{
    entities::{Collection, Record, RecordExt, score::format_score},
    errors::Result,
    store::RecordStore,
};
use std::fmt;

/// Label used when a grouping field is absent.
pub const UNKNOWN: &str = "Unknown";

/// Line printed on the report card when the selected student has no scores.
pub const PLACEHOLDER_SCORES: &str = "No scores found. (Dummy: Math: 80, English: 75)";

/// The dashboard reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    StudentCountByGrade,
    AverageScorePerSubject,
    TeacherAssignment,
    EnrollmentStatus,
    CapacityVsActual,
    StudentsByGrade,
    StudentReportCard,
    Totals,
}

impl ReportKind {
    /// Every report, in dashboard order.
    pub const ALL: [Self; 8] = [
        Self::StudentCountByGrade,
        Self::AverageScorePerSubject,
        Self::TeacherAssignment,
        Self::EnrollmentStatus,
        Self::CapacityVsActual,
        Self::StudentsByGrade,
        Self::StudentReportCard,
        Self::Totals,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::StudentCountByGrade => "Student Count by Grade",
            Self::AverageScorePerSubject => "Average Score per Subject",
            Self::TeacherAssignment => "Teacher Assignment",
            Self::EnrollmentStatus => "Enrollment Status",
            Self::CapacityVsActual => "Capacity vs Actual",
            Self::StudentsByGrade => "Students by Grade",
            Self::StudentReportCard => "Student Report Card",
            Self::Totals => "Total Students, Teachers, Subjects",
        }
    }

    /// Loads what the report needs from `store` and renders it.
    pub fn render<S: RecordStore>(self, store: &S) -> Result<String> {
        Ok(match self {
            Self::StudentCountByGrade => {
                render_student_count_by_grade(&store.load_records(Collection::Students)?)
            }
            Self::AverageScorePerSubject => {
                render_average_score_per_subject(&store.load_records(Collection::Scores)?)
            }
            Self::TeacherAssignment => {
                render_teacher_assignment(&store.load_records(Collection::Grades)?)
            }
            Self::EnrollmentStatus => {
                render_enrollment_status(&store.load_records(Collection::Enrollments)?)
            }
            Self::CapacityVsActual => render_capacity_vs_actual(
                &store.load_records(Collection::Grades)?,
                &store.load_records(Collection::Students)?,
            ),
            Self::StudentsByGrade => {
                render_students_by_grade(&store.load_records(Collection::Students)?)
            }
            Self::StudentReportCard => render_report_card(
                &store.load_records(Collection::Students)?,
                &store.load_records(Collection::Scores)?,
            ),
            Self::Totals => render_totals(&Totals {
                students: store.load_records(Collection::Students)?.len(),
                teachers: store.load_records(Collection::Teachers)?.len(),
                subjects: store.load_records(Collection::Subjects)?.len(),
            }),
        })
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Renders every report under its title, separated by blank lines.
pub fn render_all<S: RecordStore>(store: &S) -> Result<String> {
    let sections = ReportKind::ALL
        .iter()
        .map(|kind| -> Result<String> {
            Ok(format!("== {} ==\n{}", kind.title(), kind.render(store)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(sections.join("\n\n"))
}

fn label(record: &Record, field: &str) -> String {
    record.text(field).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Groups records by the text of `field`, keeping first-seen group order.
#[must_use]
pub fn group_by<'a>(records: &'a [Record], field: &str) -> Vec<(String, Vec<&'a Record>)> {
    let mut groups: Vec<(String, Vec<&Record>)> = Vec::new();
    for record in records {
        let key = label(record, field);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }
    groups
}

/// Number of records per value of `field`.
#[must_use]
pub fn count_by(records: &[Record], field: &str) -> Vec<(String, usize)> {
    group_by(records, field)
        .into_iter()
        .map(|(key, members)| (key, members.len()))
        .collect()
}

/// Mean of `value_field` per value of `group_field`. Non-numeric values count as 0.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Group sizes are far below 2^52
pub fn average_by(records: &[Record], group_field: &str, value_field: &str) -> Vec<(String, f64)> {
    group_by(records, group_field)
        .into_iter()
        .map(|(key, members)| {
            let total: f64 = members
                .iter()
                .map(|r| r.number(value_field).unwrap_or(0.0))
                .sum();
            (key, total / members.len() as f64)
        })
        .collect()
}

/// Seats filled against seats available for one grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityLine {
    pub grade: String,
    pub actual: usize,
    /// Capacity as stored, `"0"` when absent
    pub capacity: String,
}

/// For each grade in load order, counts the students whose `grade` equals its name.
#[must_use]
pub fn capacity_vs_actual(grades: &[Record], students: &[Record]) -> Vec<CapacityLine> {
    let per_grade = count_by(students, "grade");
    grades
        .iter()
        .map(|g| {
            let name = label(g, "name");
            let actual = per_grade
                .iter()
                .find(|(k, _)| *k == name)
                .map_or(0, |(_, n)| *n);
            CapacityLine {
                grade: name,
                actual,
                capacity: g.text("capacity").unwrap_or_else(|| "0".to_string()),
            }
        })
        .collect()
}

/// Collection sizes for the totals report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub students: usize,
    pub teachers: usize,
    pub subjects: usize,
}

fn or_empty(lines: &[String], empty: &str) -> String {
    if lines.is_empty() {
        empty.to_string()
    } else {
        lines.join("\n")
    }
}

#[must_use]
pub fn render_student_count_by_grade(students: &[Record]) -> String {
    let lines: Vec<String> = count_by(students, "grade")
        .into_iter()
        .map(|(grade, n)| format!("Grade {grade}: {n} students"))
        .collect();
    or_empty(&lines, "No student records found.")
}

#[must_use]
pub fn render_average_score_per_subject(scores: &[Record]) -> String {
    let lines: Vec<String> = average_by(scores, "subject", "score")
        .into_iter()
        .map(|(subject, avg)| format!("{subject}: {avg:.2}"))
        .collect();
    or_empty(&lines, "No score records found.")
}

/// Lists, per class teacher, the grades they are assigned to.
#[must_use]
pub fn render_teacher_assignment(grades: &[Record]) -> String {
    let lines: Vec<String> = group_by(grades, "class_teacher")
        .into_iter()
        .map(|(teacher, members)| {
            let names: Vec<String> = members.iter().map(|g| label(g, "name")).collect();
            format!("Teacher {teacher}: Grades {}", names.join(", "))
        })
        .collect();
    or_empty(&lines, "No teacher assignments found.")
}

#[must_use]
pub fn render_enrollment_status(enrollments: &[Record]) -> String {
    let lines: Vec<String> = count_by(enrollments, "status")
        .into_iter()
        .map(|(status, n)| format!("{status}: {n}"))
        .collect();
    or_empty(&lines, "No enrollment records found.")
}

#[must_use]
pub fn render_capacity_vs_actual(grades: &[Record], students: &[Record]) -> String {
    let lines: Vec<String> = capacity_vs_actual(grades, students)
        .into_iter()
        .map(|l| format!("Grade {}: {}/{} students", l.grade, l.actual, l.capacity))
        .collect();
    or_empty(&lines, "No grade or student records found.")
}

#[must_use]
pub fn render_students_by_grade(students: &[Record]) -> String {
    let lines: Vec<String> = group_by(students, "grade")
        .into_iter()
        .flat_map(|(grade, members)| {
            std::iter::once(format!("Grade {grade}:"))
                .chain(members.into_iter().map(|s| format!("  - {}", label(s, "name"))))
        })
        .collect();
    or_empty(&lines, "No student records found.")
}

/// Report card for the first student in load order only.
#[must_use]
pub fn render_report_card(students: &[Record], scores: &[Record]) -> String {
    let Some(student) = students.first() else {
        return "No student records found.".to_string();
    };
    let student_id = student.text("student_id");

    let mut lines = vec![format!(
        "Report Card for {} (ID: {})",
        label(student, "name"),
        student_id.as_deref().unwrap_or(UNKNOWN)
    )];
    let before = lines.len();
    lines.extend(
        scores
            .iter()
            .filter(|s| s.text("student_id") == student_id)
            .map(|s| {
                let value = s
                    .number("score")
                    .map_or_else(|| label(s, "score"), format_score);
                format!("{}: {value}", label(s, "subject"))
            }),
    );
    if lines.len() == before {
        lines.push(PLACEHOLDER_SCORES.to_string());
    }
    lines.join("\n")
}

#[must_use]
pub fn render_totals(totals: &Totals) -> String {
    format!(
        "Total Students: {}\nTotal Teachers: {}\nTotal Subjects: {}",
        totals.students, totals.teachers, totals.subjects
    )
}
