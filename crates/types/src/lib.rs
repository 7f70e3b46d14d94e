//! # hrs-types - Shared domain types for the Home Recipes Service
//!
//! This crate defines the external-facing representations exchanged over the
//! HTTP API:
//!
//! - [`Recipe`] and [`Ingredient`] - the two resources the service manages
//! - [`HraResponse`] - the response envelope returned by every endpoint
//! - [`HrsError`] - the tagged error carried inside failure envelopes
//!
//! The envelope always carries a [`Status`] (HTTP code plus human
//! description), an optional result payload, and an optional error. Success
//! envelopes have `error: null`; failure envelopes have `respObj: null`.

#![warn(missing_docs)]

pub mod envelope;
pub mod error;
pub mod resource;

pub use envelope::{HraResponse, ResponseObject, Status};
pub use error::{ErrorKind, HrsError};
pub use resource::{Ingredient, Recipe};
