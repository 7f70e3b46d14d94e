//! Core document storage trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageResult;

/// Storage interface for JSON documents keyed by collection and id.
///
/// All operations are keyed by a collection name (e.g. `"recipes"`) and a
/// document identifier. Implementations must be internally synchronized:
/// the REST layer shares a single backend across concurrent request tasks
/// behind an `Arc` with no additional locking.
///
/// # Example
///
/// ```ignore
/// use hrs_persistence::DocumentStorage;
/// use serde_json::json;
///
/// async fn example<S: DocumentStorage>(storage: &S) -> hrs_persistence::StorageResult<()> {
///     storage
///         .insert("recipes", "r-1", json!({"id": "r-1", "name": "Tortilla"}))
///         .await?;
///
///     let found = storage.find_by_id("recipes", "r-1").await?;
///     assert!(found.is_some());
///
///     storage.delete("recipes", "r-1").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Inserts a new document.
    ///
    /// # Errors
    ///
    /// * [`StorageError::AlreadyExists`] - a document with this id exists
    /// * [`StorageError::Connection`] / [`StorageError::Backend`] - the
    ///   backend failed
    ///
    /// [`StorageError::AlreadyExists`]: crate::error::StorageError::AlreadyExists
    /// [`StorageError::Connection`]: crate::error::StorageError::Connection
    /// [`StorageError::Backend`]: crate::error::StorageError::Backend
    async fn insert(&self, collection: &str, id: &str, document: Value) -> StorageResult<()>;

    /// Looks up a document by id, returning `None` when it does not exist.
    async fn find_by_id(&self, collection: &str, id: &str) -> StorageResult<Option<Value>>;

    /// Replaces an existing document in place.
    ///
    /// # Errors
    ///
    /// * [`StorageError::NotFound`] - no document with this id exists
    ///
    /// [`StorageError::NotFound`]: crate::error::StorageError::NotFound
    async fn update(&self, collection: &str, id: &str, document: Value) -> StorageResult<()>;

    /// Removes a document.
    ///
    /// # Errors
    ///
    /// * [`StorageError::NotFound`] - no document with this id exists
    ///
    /// [`StorageError::NotFound`]: crate::error::StorageError::NotFound
    async fn delete(&self, collection: &str, id: &str) -> StorageResult<()>;
}
