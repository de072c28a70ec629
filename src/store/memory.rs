//! In-memory backend. Single-threaded; nothing outlives the value.

use super::RecordStore;
use crate::{
    entities::{Collection, Record},
    errors::Result,
};
use std::{cell::RefCell, collections::HashMap};

/// Record store holding every collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RefCell<HashMap<Collection, Vec<Record>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load_records(&self, collection: Collection) -> Result<Vec<Record>> {
        Ok(self
            .collections
            .borrow()
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    fn persist_records(&self, collection: Collection, records: &[Record]) -> Result<()> {
        self.collections
            .borrow_mut()
            .insert(collection, records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_unknown_collection_is_empty() -> Result<()> {
        let store = MemoryStore::new();
        assert!(store.load_records(Collection::Enrollments)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_collections_are_independent() -> Result<()> {
        let store = MemoryStore::new();
        let Value::Object(record) = json!({"name": "Math"}) else {
            unreachable!()
        };
        store.persist_records(Collection::Subjects, &[record])?;

        assert_eq!(store.load_records(Collection::Subjects)?.len(), 1);
        assert!(store.load_records(Collection::Grades)?.is_empty());
        Ok(())
    }
}
