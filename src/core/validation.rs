//! Shared validation steps used by every entity's `create_*` operation.
//!
//! The order is fixed: required fields, then numeric coercion, then the uniqueness
//! check against the stored collection, then append.

use crate::{
    entities::{Collection, Record, RecordExt},
    errors::{Error, Result, ValidationKind},
    store::{RecordStore, to_record},
};
use serde::Serialize;
use tracing::{debug, info};

/// How a uniqueness key is compared against stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    CaseSensitive,
    CaseInsensitive,
}

impl KeyMatch {
    fn matches(self, stored: &str, candidate: &str) -> bool {
        match self {
            Self::CaseSensitive => stored == candidate,
            Self::CaseInsensitive => stored.to_lowercase() == candidate.to_lowercase(),
        }
    }
}

/// The uniqueness constraint for a collection.
#[derive(Debug, Clone, Copy)]
pub struct UniqueKey<'a> {
    pub field: &'static str,
    pub value: &'a str,
    pub matching: KeyMatch,
}

/// Fails with `missing field` naming the first field that is empty after trimming.
pub fn require_fields(fields: &[(&'static str, &str)]) -> Result<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(Error::validation(ValidationKind::MissingField, *name)),
        None => Ok(()),
    }
}

/// Parses a whole number, failing with `type mismatch`.
pub fn parse_integer(field: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        Error::validation(
            ValidationKind::TypeMismatch,
            format!("{field} must be an integer, got '{}'", raw.trim()),
        )
    })
}

/// Parses a finite number, failing with `type mismatch`.
pub fn parse_number(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            Error::validation(
                ValidationKind::TypeMismatch,
                format!("{field} must be a number, got '{}'", raw.trim()),
            )
        })
}

/// Returns true if some record already holds `key.value` in `key.field`.
#[must_use]
pub fn key_exists(records: &[Record], key: &UniqueKey<'_>) -> bool {
    records.iter().any(|record| {
        record
            .text(key.field)
            .is_some_and(|stored| key.matching.matches(&stored, key.value))
    })
}

/// Appends `model` to `collection` after checking `key`, as one locked cycle.
///
/// Nothing is written when the key collides.
pub fn append_checked<S, T>(
    store: &S,
    collection: Collection,
    model: &T,
    key: Option<UniqueKey<'_>>,
) -> Result<()>
where
    S: RecordStore,
    T: Serialize,
{
    let record = to_record(model)?;
    store.update_records(collection, |records| {
        if let Some(key) = key.as_ref().filter(|k| key_exists(records, k)) {
            debug!(
                "Rejected {} append: {} '{}' exists",
                collection, key.field, key.value
            );
            return Err(Error::validation(
                ValidationKind::DuplicateKey,
                format!("{} '{}' already exists", key.field, key.value),
            ));
        }
        records.push(record);
        Ok(())
    })?;
    info!("Appended record to {}", collection);
    Ok(())
}
