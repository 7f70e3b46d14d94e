//! In-memory storage backend.
//!
//! Keeps every collection in a process-local HashMap. Used as the default
//! backend for development and throughout the test suites; data does not
//! survive a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::core::DocumentStorage;
use crate::error::{StorageError, StorageResult};

type Collection = HashMap<String, Value>;

/// In-process document storage.
#[derive(Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Collection::len)
    }

    /// True when the collection holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, collection: &str, id: &str, document: Value) -> StorageResult<()> {
        let mut collections = self.collections.write();
        let entries = collections.entry(collection.to_string()).or_default();

        if entries.contains_key(id) {
            return Err(StorageError::AlreadyExists {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        debug!(collection = %collection, id = %id, "Inserting document");
        entries.insert(id.to_string(), document);
        Ok(())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StorageResult<Option<Value>> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .and_then(|entries| entries.get(id))
            .cloned())
    }

    async fn update(&self, collection: &str, id: &str, document: Value) -> StorageResult<()> {
        let mut collections = self.collections.write();
        let entry = collections
            .get_mut(collection)
            .and_then(|entries| entries.get_mut(id))
            .ok_or_else(|| StorageError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        debug!(collection = %collection, id = %id, "Updating document");
        *entry = document;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StorageResult<()> {
        let mut collections = self.collections.write();
        let removed = collections
            .get_mut(collection)
            .and_then(|entries| entries.remove(id));

        match removed {
            Some(_) => {
                debug!(collection = %collection, id = %id, "Deleted document");
                Ok(())
            }
            None => Err(StorageError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }
}
