//! # hrs-persistence - Document storage for the Home Recipes Service
//!
//! This crate defines the [`DocumentStorage`] trait - the storage interface
//! the REST layer is written against - together with its error taxonomy,
//! the JSON-file connection configuration, and the available backends.
//!
//! ## Backends
//!
//! - [`backends::memory::MemoryBackend`] - in-process HashMap storage,
//!   always available; the default for development and tests.
//! - `backends::mongodb::MongoBackend` - MongoDB driver backend, compiled
//!   behind the `mongodb` cargo feature.
//!
//! ## Documents
//!
//! Documents are stored as opaque [`serde_json::Value`] objects keyed by
//! collection name and identifier. Backends are internally synchronized and
//! safe to share across request tasks behind an `Arc`.

#![warn(missing_docs)]

pub mod backends;
pub mod config;
pub mod core;
pub mod error;

pub use config::StorageConfig;
pub use core::DocumentStorage;
pub use error::{StorageError, StorageResult};
