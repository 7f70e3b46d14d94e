//! MongoDB storage backend.
//!
//! Documents are stored one collection per resource type, with the logical
//! identifier kept in an `id` field (the driver-assigned `_id` is left
//! alone). Connection settings come from [`StorageConfig`].

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{self, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::core::DocumentStorage;
use crate::error::{StorageError, StorageResult};

/// Document storage backed by a MongoDB database.
pub struct MongoBackend {
    database: Database,
}

impl MongoBackend {
    /// Connects to the configured MongoDB instance and verifies the
    /// connection with a ping.
    pub async fn connect(config: &StorageConfig) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(config.connect_timeout_secs));

        let client =
            Client::with_options(options).map_err(|e| StorageError::Connection(e.to_string()))?;
        let database = client.database(&config.database);

        // Surface connection problems at startup instead of on first request
        database
            .run_command(doc! {"ping": 1})
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        info!(database = %config.database, "Connected to MongoDB");
        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

fn to_document(document: &Value) -> StorageResult<Document> {
    bson::to_document(document).map_err(|e| StorageError::InvalidDocument(e.to_string()))
}

fn to_value(document: Document) -> StorageResult<Value> {
    serde_json::to_value(document).map_err(|e| StorageError::InvalidDocument(e.to_string()))
}

fn backend_error(err: mongodb::error::Error) -> StorageError {
    StorageError::Backend(err.to_string())
}

#[async_trait]
impl DocumentStorage for MongoBackend {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn insert(&self, collection: &str, id: &str, document: Value) -> StorageResult<()> {
        let coll = self.collection(collection);

        // Pre-read instead of a unique index: ids are server-assigned UUIDs,
        // so collisions only occur on client misuse of the backend directly.
        let existing = coll
            .find_one(doc! {"id": id})
            .await
            .map_err(backend_error)?;
        if existing.is_some() {
            return Err(StorageError::AlreadyExists {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        debug!(collection = %collection, id = %id, "Inserting document");
        coll.insert_one(to_document(&document)?)
            .await
            .map_err(backend_error)?;
        Ok(())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StorageResult<Option<Value>> {
        let found = self
            .collection(collection)
            .find_one(doc! {"id": id})
            .await
            .map_err(backend_error)?;

        match found {
            Some(mut document) => {
                document.remove("_id");
                Ok(Some(to_value(document)?))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, collection: &str, id: &str, document: Value) -> StorageResult<()> {
        debug!(collection = %collection, id = %id, "Updating document");
        let result = self
            .collection(collection)
            .replace_one(doc! {"id": id}, to_document(&document)?)
            .await
            .map_err(backend_error)?;

        if result.matched_count == 0 {
            return Err(StorageError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StorageResult<()> {
        debug!(collection = %collection, id = %id, "Deleting document");
        let result = self
            .collection(collection)
            .delete_one(doc! {"id": id})
            .await
            .map_err(backend_error)?;

        if result.deleted_count == 0 {
            return Err(StorageError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_document_requires_object() {
        assert!(to_document(&json!({"id": "r-1", "steps": ["mix"]})).is_ok());
        assert!(to_document(&json!("not an object")).is_err());
    }

    #[test]
    fn test_document_value_round_trip() {
        let value = json!({
            "id": "r-1",
            "name": "Tortilla",
            "ingredients": ["i-1"],
            "steps": ["peel", "fry", "mix"]
        });

        let document = to_document(&value).unwrap();
        let back = to_value(document).unwrap();
        assert_eq!(back, value);
    }
}
