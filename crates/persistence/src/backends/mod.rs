//! Storage backend implementations.

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
