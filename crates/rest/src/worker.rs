//! Worker layer: one operation per resource per verb.
//!
//! The worker owns the storage backend, performs the storage call, and
//! classifies the outcome into a response envelope. The status mapping is
//! fixed (several earlier iterations of this service drifted between
//! mappings):
//!
//! | Outcome | Envelope error kind | HTTP status |
//! |---------|--------------------|-------------|
//! | success | — | 201 / 200 / 204 |
//! | empty id | functional | 409 |
//! | not found / insert conflict | technical | 409 |
//! | connection or backend failure | technical | 500 |
//! | document mapping failure | fatal | 500 |

use std::sync::Arc;

use hrs_persistence::{DocumentStorage, StorageError};
use hrs_types::{HraResponse, HrsError, Ingredient, Recipe, ResponseObject};
use tracing::debug;
use uuid::Uuid;

use crate::mapper;

/// Collection holding recipe documents.
pub const RECIPE_COLLECTION: &str = "recipes";
/// Collection holding ingredient documents.
pub const INGREDIENT_COLLECTION: &str = "ingredients";

const CREATED: &str = "Created successfully";
const QUERIED: &str = "Query completed";
const PATCHED: &str = "Element patched successfully";
const REMOVED: &str = "Element removed";
const FAILED_VALIDATION: &str = "Failed validation";
const TECHNICAL: &str = "Technical error";
const OP_NOT_COMPLETED: &str = "Operation not completed";

/// Executes CRUD operations against the storage backend and builds the
/// response envelope for each outcome.
pub struct Worker<S> {
    storage: Arc<S>,
}

impl<S: DocumentStorage> Worker<S> {
    /// Creates a worker over the given backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Returns the name of the underlying backend.
    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    // -- Recipes --

    /// Creates a new recipe, assigning it a fresh identifier.
    pub async fn create_recipe(&self, mut recipe: Recipe) -> HraResponse {
        recipe.id = new_id();
        debug!(collection = RECIPE_COLLECTION, id = %recipe.id, "Creating recipe");

        let document = match mapper::recipe_to_document(&recipe) {
            Ok(document) => document,
            Err(err) => return mapping_failure(err),
        };

        match self.storage.insert(RECIPE_COLLECTION, &recipe.id, document).await {
            Ok(()) => HraResponse::success(201, CREATED, Some(ResponseObject::Recipe(recipe))),
            Err(err) => storage_failure(err),
        }
    }

    /// Returns the recipe with the given id.
    pub async fn recipe_by_id(&self, id: &str) -> HraResponse {
        if id.is_empty() {
            return missing_id();
        }
        debug!(collection = RECIPE_COLLECTION, id = %id, "Querying recipe");

        match self.storage.find_by_id(RECIPE_COLLECTION, id).await {
            Ok(Some(document)) => match mapper::document_to_recipe(document) {
                Ok(recipe) => {
                    HraResponse::success(200, QUERIED, Some(ResponseObject::Recipe(recipe)))
                }
                Err(err) => mapping_failure(err),
            },
            Ok(None) => storage_failure(not_found(RECIPE_COLLECTION, id)),
            Err(err) => storage_failure(err),
        }
    }

    /// Replaces the recipe with the given id; the id itself never changes.
    pub async fn patch_recipe(&self, id: &str, mut recipe: Recipe) -> HraResponse {
        if id.is_empty() {
            return missing_id();
        }
        debug!(collection = RECIPE_COLLECTION, id = %id, "Patching recipe");

        recipe.id = id.to_string();
        let document = match mapper::recipe_to_document(&recipe) {
            Ok(document) => document,
            Err(err) => return mapping_failure(err),
        };

        match self.storage.update(RECIPE_COLLECTION, id, document).await {
            Ok(()) => HraResponse::success(200, PATCHED, None),
            Err(err) => storage_failure(err),
        }
    }

    /// Deletes the recipe with the given id.
    pub async fn delete_recipe(&self, id: &str) -> HraResponse {
        if id.is_empty() {
            return missing_id();
        }
        debug!(collection = RECIPE_COLLECTION, id = %id, "Deleting recipe");

        match self.storage.delete(RECIPE_COLLECTION, id).await {
            Ok(()) => HraResponse::success(204, REMOVED, None),
            Err(err) => storage_failure(err),
        }
    }

    // -- Ingredients --

    /// Creates a new ingredient, assigning it a fresh identifier.
    pub async fn create_ingredient(&self, mut ingredient: Ingredient) -> HraResponse {
        ingredient.id = new_id();
        debug!(collection = INGREDIENT_COLLECTION, id = %ingredient.id, "Creating ingredient");

        let document = match mapper::ingredient_to_document(&ingredient) {
            Ok(document) => document,
            Err(err) => return mapping_failure(err),
        };

        match self
            .storage
            .insert(INGREDIENT_COLLECTION, &ingredient.id, document)
            .await
        {
            Ok(()) => {
                HraResponse::success(201, CREATED, Some(ResponseObject::Ingredient(ingredient)))
            }
            Err(err) => storage_failure(err),
        }
    }

    /// Returns the ingredient with the given id.
    pub async fn ingredient_by_id(&self, id: &str) -> HraResponse {
        if id.is_empty() {
            return missing_id();
        }
        debug!(collection = INGREDIENT_COLLECTION, id = %id, "Querying ingredient");

        match self.storage.find_by_id(INGREDIENT_COLLECTION, id).await {
            Ok(Some(document)) => match mapper::document_to_ingredient(document) {
                Ok(ingredient) => {
                    HraResponse::success(200, QUERIED, Some(ResponseObject::Ingredient(ingredient)))
                }
                Err(err) => mapping_failure(err),
            },
            Ok(None) => storage_failure(not_found(INGREDIENT_COLLECTION, id)),
            Err(err) => storage_failure(err),
        }
    }

    /// Replaces the ingredient with the given id; the id itself never changes.
    pub async fn patch_ingredient(&self, id: &str, mut ingredient: Ingredient) -> HraResponse {
        if id.is_empty() {
            return missing_id();
        }
        debug!(collection = INGREDIENT_COLLECTION, id = %id, "Patching ingredient");

        ingredient.id = id.to_string();
        let document = match mapper::ingredient_to_document(&ingredient) {
            Ok(document) => document,
            Err(err) => return mapping_failure(err),
        };

        match self.storage.update(INGREDIENT_COLLECTION, id, document).await {
            Ok(()) => HraResponse::success(200, PATCHED, None),
            Err(err) => storage_failure(err),
        }
    }

    /// Deletes the ingredient with the given id.
    pub async fn delete_ingredient(&self, id: &str) -> HraResponse {
        if id.is_empty() {
            return missing_id();
        }
        debug!(collection = INGREDIENT_COLLECTION, id = %id, "Deleting ingredient");

        match self.storage.delete(INGREDIENT_COLLECTION, id).await {
            Ok(()) => HraResponse::success(204, REMOVED, None),
            Err(err) => storage_failure(err),
        }
    }
}

/// Generates a fresh document identifier.
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn not_found(collection: &str, id: &str) -> StorageError {
    StorageError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

fn missing_id() -> HraResponse {
    HraResponse::failure(
        409,
        FAILED_VALIDATION,
        HrsError::functional("mandatory parameter id"),
    )
}

fn mapping_failure(err: serde_json::Error) -> HraResponse {
    HraResponse::failure(
        500,
        TECHNICAL,
        HrsError::fatal(format!("error mapping the document: {}", err)),
    )
}

fn storage_failure(err: StorageError) -> HraResponse {
    if err.is_state_error() {
        HraResponse::failure(409, OP_NOT_COMPLETED, HrsError::technical(err.to_string()))
    } else {
        HraResponse::failure(500, TECHNICAL, HrsError::technical(err.to_string()))
    }
}
