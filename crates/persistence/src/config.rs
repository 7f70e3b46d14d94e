//! Storage connection configuration.
//!
//! Connection settings are supplied as a small JSON file, e.g.:
//!
//! ```json
//! {
//!     "url": "mongodb://localhost:27017",
//!     "database": "homerecipes",
//!     "connect_timeout_secs": 5
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Connection settings for a database-backed storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Connection URL.
    pub url: String,

    /// Database name.
    pub database: String,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "homerecipes".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl StorageConfig {
    /// Loads the configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StorageError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            StorageError::Config(format!("cannot parse {}: {}", path.display(), e))
        })
    }
}
