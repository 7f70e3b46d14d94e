//! Envelope error types.
//!
//! Failures are surfaced to callers as an [`HrsError`] carried inside the
//! response envelope, tagged with one of three kinds:
//!
//! | Kind | Meaning | HTTP status |
//! |------|---------|-------------|
//! | `functional` | client-caused invalid input (missing id, undecodable body) | 409 |
//! | `technical` | storage-caused failure (not found, conflict, connection) | 409 or 500 |
//! | `fatal` | serialization failure or unclassified | 500 |

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three error categories the service distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Client-caused invalid-input condition.
    Functional,
    /// Storage/infrastructure-caused failure.
    Technical,
    /// Serialization failure or unclassified error.
    Fatal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Functional => write!(f, "functional"),
            ErrorKind::Technical => write!(f, "technical"),
            ErrorKind::Fatal => write!(f, "fatal"),
        }
    }
}

/// An error as carried in the response envelope.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind} error: {message}")]
pub struct HrsError {
    /// The error category.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl HrsError {
    /// Creates a functional (invalid input) error.
    pub fn functional(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Functional,
            message: message.into(),
        }
    }

    /// Creates a technical (storage/infrastructure) error.
    pub fn technical(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Technical,
            message: message.into(),
        }
    }

    /// Creates a fatal (unclassified) error.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Fatal,
            message: message.into(),
        }
    }
}
