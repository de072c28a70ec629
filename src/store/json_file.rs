//! JSON file backend - one pretty-printed array file per collection.
//!
//! Writes go to a temporary sibling that is flushed and renamed over the target, so a
//! failed write never truncates the existing file. Every write path holds the
//! collection's [`CollectionLock`].

use super::{CollectionLock, RecordStore};
use crate::{
    entities::{Collection, Record},
    errors::{Error, Result},
};
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

/// Default time to wait for another writer to release a collection.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(2);
/// Default age after which a leftover lock file is broken.
pub const DEFAULT_STALE_LOCK: Duration = Duration::from_secs(30);

/// Record store backed by `<root>/<collection>.json` files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
    lock_timeout: Duration,
    stale_after: Duration,
}

impl JsonFileStore {
    /// Creates a store over `root` with default lock settings.
    ///
    /// The directory is not touched until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            stale_after: DEFAULT_STALE_LOCK,
        }
    }

    /// Overrides how long to wait for a held lock and when to treat it as abandoned.
    #[must_use]
    pub const fn with_lock_settings(mut self, timeout: Duration, stale_after: Duration) -> Self {
        self.lock_timeout = timeout;
        self.stale_after = stale_after;
        self
    }

    /// Data directory holding the collection files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `collection`.
    #[must_use]
    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    fn lock(&self, collection: Collection) -> Result<CollectionLock> {
        fs::create_dir_all(&self.root).map_err(|e| {
            Error::storage(
                collection,
                format!("failed to create data directory {}: {e}", self.root.display()),
            )
        })?;
        let lock_path = self.root.join(format!("{}.lock", collection.file_name()));
        CollectionLock::acquire(
            &lock_path,
            collection.name(),
            self.lock_timeout,
            self.stale_after,
        )
    }

    fn read_file(&self, collection: Collection) -> Result<Vec<Record>> {
        let path = self.collection_path(collection);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No file for {}, treating as empty", collection);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::storage(
                    collection,
                    format!("failed to read {}: {e}", path.display()),
                ));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let values: Vec<Value> = serde_json::from_slice(&raw).map_err(|e| {
            Error::storage(
                collection,
                format!("{} is not a JSON array: {e}", path.display()),
            )
        })?;

        let records = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(record) => Ok(record),
                _ => Err(Error::storage(
                    collection,
                    format!("entry {index} in {} is not an object", path.display()),
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} records from {}", records.len(), collection);
        Ok(records)
    }

    fn write_file(&self, collection: Collection, records: &[Record]) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser)?;

        let path = self.collection_path(collection);
        let tmp_path = self.root.join(format!(
            "{}.tmp.{}",
            collection.file_name(),
            std::process::id()
        ));

        if let Err(e) = write_synced(&tmp_path, &buf) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::storage(
                collection,
                format!("failed to write {}: {e}", tmp_path.display()),
            ));
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::storage(
                collection,
                format!("failed to replace {}: {e}", path.display()),
            ));
        }

        debug!("Persisted {} records to {}", records.len(), collection);
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl RecordStore for JsonFileStore {
    fn load_records(&self, collection: Collection) -> Result<Vec<Record>> {
        self.read_file(collection)
    }

    fn persist_records(&self, collection: Collection, records: &[Record]) -> Result<()> {
        let _lock = self.lock(collection)?;
        self.write_file(collection, records)
    }

    fn update_records<F>(&self, collection: Collection, f: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Record>) -> Result<()>,
    {
        let _lock = self.lock(collection)?;
        let mut records = self.read_file(collection)?;
        f(&mut records)?;
        self.write_file(collection, &records)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path().join("not-created-yet"));

        assert!(store.load_records(Collection::Students)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_persist_then_load_round_trips() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path());
        let records = vec![
            record(json!({"student_id": "S1", "subject": "Math", "teacher_id": "T1", "score": 80.0})),
            record(json!({"student_id": "S2", "subject": "Art", "teacher_id": "T2", "score": 72.5})),
        ];

        store.persist_records(Collection::Scores, &records)?;

        assert_eq!(store.load_records(Collection::Scores)?, records);
        Ok(())
    }

    #[test]
    fn test_file_layout_is_indented_array_in_field_order() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path());
        store.persist_records(
            Collection::Grades,
            &[record(json!({"name": "9", "capacity": 30}))],
        )?;

        let text = fs::read_to_string(dir.path().join("grades.json"))?;
        assert_eq!(
            text,
            "[\n    {\n        \"name\": \"9\",\n        \"capacity\": 30\n    }\n]"
        );
        Ok(())
    }

    #[test]
    fn test_persist_leaves_no_temp_or_lock_files() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path());
        store.persist_records(Collection::Users, &[])?;

        let names: Vec<String> = fs::read_dir(dir.path())?
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["users.json".to_string()]);
        Ok(())
    }

    #[test]
    fn test_blank_file_is_empty_collection() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("teachers.json"), "  \n")?;
        let store = JsonFileStore::new(dir.path());

        assert!(store.load_records(Collection::Teachers)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_storage_error() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("subjects.json"), "[{\"name\": ")?;
        let store = JsonFileStore::new(dir.path());

        let err = store.load_records(Collection::Subjects).unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        Ok(())
    }

    #[test]
    fn test_non_object_entry_is_storage_error() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("scores.json"), "[1, 2]")?;
        let store = JsonFileStore::new(dir.path());

        let err = store.load_records(Collection::Scores).unwrap_err();
        assert!(err.to_string().contains("entry 0"));
        Ok(())
    }

    #[test]
    fn test_update_waits_for_held_lock_then_fails() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path())
            .with_lock_settings(Duration::from_millis(60), Duration::from_secs(3600));
        fs::write(dir.path().join("grades.json.lock"), "1\n")?;

        let err = store
            .update_records(Collection::Grades, |_| Ok(()))
            .unwrap_err();

        assert!(err.to_string().contains("timed out"));
        assert!(!dir.path().join("grades.json").exists());
        Ok(())
    }

    #[test]
    fn test_failed_write_keeps_previous_content() -> Result<()> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path());
        let original = vec![record(json!({"username": "admin"}))];
        store.persist_records(Collection::Users, &original)?;

        // A directory squatting on the temp path makes the write fail.
        let tmp = dir
            .path()
            .join(format!("users.json.tmp.{}", std::process::id()));
        fs::create_dir(&tmp)?;

        let result = store.persist_records(Collection::Users, &[]);
        assert!(matches!(result, Err(Error::Storage { .. })));
        assert_eq!(store.load_records(Collection::Users)?, original);
        Ok(())
    }

    #[test]
    fn test_concurrent_appenders_lose_no_records() -> Result<()> {
        use crate::{core::score::create_score, test_utils::new_score};

        let dir = TempDir::new()?;
        std::thread::scope(|s| {
            for writer in 0..4 {
                let store = JsonFileStore::new(dir.path())
                    .with_lock_settings(Duration::from_secs(30), Duration::from_secs(60));
                s.spawn(move || {
                    for n in 0..25 {
                        let input = new_score(&format!("S{writer}"), "Math", &n.to_string());
                        create_score(&store, &input).unwrap();
                    }
                });
            }
        });

        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.load_records(Collection::Scores)?.len(), 100);
        Ok(())
    }
}
