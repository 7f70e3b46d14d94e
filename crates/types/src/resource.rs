//! Resource DTOs.
//!
//! These are the external representations the service accepts and returns.
//! The `id` field is assigned by the server when a resource is created and
//! is immutable afterwards; request bodies may omit it.

use serde::{Deserialize, Serialize};

/// A recipe: an ordered list of steps over a set of ingredient references.
///
/// Unknown fields are rejected so that a recipe body is never silently
/// accepted where an ingredient is expected, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Recipe {
    /// Server-assigned identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Ordered references to ingredient identifiers.
    pub ingredients: Vec<String>,

    /// Ordered preparation steps.
    pub steps: Vec<String>,
}

/// An ingredient with a numeric quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ingredient {
    /// Server-assigned identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Quantity in whatever unit the recipe implies.
    pub quantity: i64,
}
