//! Record store - load and persist whole collections.
//!
//! Every mutation in the system is "load the collection, append one record, persist the
//! collection". The store keeps no cache between calls, so each operation sees whatever
//! the backing storage holds at that moment. Two backends exist: [`JsonFileStore`], one
//! JSON array file per collection, and [`MemoryStore`] for embedding and tests.

mod json_file;
mod lock;
mod memory;

pub use json_file::{DEFAULT_LOCK_TIMEOUT, DEFAULT_STALE_LOCK, JsonFileStore};
pub use lock::CollectionLock;
pub use memory::MemoryStore;

use crate::{
    entities::{Collection, Record},
    errors::{Error, Result},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Storage contract shared by all backends.
pub trait RecordStore {
    /// Returns the stored records in insertion order.
    ///
    /// A collection with no backing storage yet is empty; that is never an error.
    fn load_records(&self, collection: Collection) -> Result<Vec<Record>>;

    /// Replaces the whole stored collection with `records`.
    ///
    /// On failure the previous content is left intact.
    fn persist_records(&self, collection: Collection, records: &[Record]) -> Result<()>;

    /// Loads `collection`, lets `f` inspect and extend it, then persists the result.
    ///
    /// Backends that can be shared between processes hold the collection's write lock
    /// for the whole cycle, so a check made inside `f` still holds when the result is
    /// written. If `f` fails nothing is persisted.
    fn update_records<F>(&self, collection: Collection, f: F) -> Result<()>
    where
        Self: Sized,
        F: FnOnce(&mut Vec<Record>) -> Result<()>,
    {
        let mut records = self.load_records(collection)?;
        f(&mut records)?;
        self.persist_records(collection, &records)
    }

    /// Loads `collection` decoded into typed models.
    fn load<T>(&self, collection: Collection) -> Result<Vec<T>>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        self.load_records(collection)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(Value::Object(record)).map_err(|e| {
                    Error::storage(collection, format!("record {index} is malformed: {e}"))
                })
            })
            .collect()
    }

    /// Persists typed models as the whole of `collection`.
    fn persist<T>(&self, collection: Collection, models: &[T]) -> Result<()>
    where
        Self: Sized,
        T: Serialize,
    {
        let records = models
            .iter()
            .map(to_record)
            .collect::<Result<Vec<_>>>()?;
        self.persist_records(collection, &records)
    }
}

/// Converts a model into an untyped record.
pub(crate) fn to_record<T: Serialize>(model: &T) -> Result<Record> {
    match serde_json::to_value(model)? {
        Value::Object(record) => Ok(record),
        other => Err(Error::Json(serde::ser::Error::custom(format!(
            "expected a JSON object for a record, got {other}"
        )))),
    }
}
