//! The response envelope.
//!
//! Every endpoint returns an [`HraResponse`]: a status (numeric HTTP code
//! plus description), an optional result payload, and an optional error.

use serde::{Deserialize, Serialize};

use crate::error::HrsError;
use crate::resource::{Ingredient, Recipe};

/// Numeric status code and human description of an operation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// HTTP status code implied by the worker outcome.
    pub code: u16,
    /// Human-readable description.
    pub description: String,
}

/// The payload of a successful response: one of the managed resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseObject {
    /// A recipe payload.
    Recipe(Recipe),
    /// An ingredient payload.
    Ingredient(Ingredient),
}

/// The JSON wrapper returned by every endpoint.
///
/// Success envelopes carry a payload (or nothing, for patch/delete) and a
/// null error; failure envelopes carry a null payload and a populated error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HraResponse {
    /// Outcome status.
    pub status: Status,

    /// Result payload, when the operation returns one.
    #[serde(rename = "respObj")]
    pub resp_obj: Option<ResponseObject>,

    /// Error details, on failure paths.
    pub error: Option<HrsError>,
}

impl HraResponse {
    /// Builds a success envelope with an optional payload.
    pub fn success(code: u16, description: impl Into<String>, resp_obj: Option<ResponseObject>) -> Self {
        Self {
            status: Status {
                code,
                description: description.into(),
            },
            resp_obj,
            error: None,
        }
    }

    /// Builds a failure envelope carrying the given error.
    pub fn failure(code: u16, description: impl Into<String>, error: HrsError) -> Self {
        Self {
            status: Status {
                code,
                description: description.into(),
            },
            resp_obj: None,
            error: Some(error),
        }
    }

    /// True when the envelope represents a failure.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let recipe = Recipe {
            id: "r-1".to_string(),
            name: "Tortilla".to_string(),
            ..Default::default()
        };
        let envelope = HraResponse::success(
            201,
            "Created successfully",
            Some(ResponseObject::Recipe(recipe)),
        );

        assert!(!envelope.is_error());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"]["code"], 201);
        assert_eq!(value["respObj"]["name"], "Tortilla");
        assert!(value["error"].is_null());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let envelope = HraResponse::failure(
            409,
            "Failed validation",
            HrsError::functional("mandatory parameter id"),
        );

        assert!(envelope.is_error());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"]["code"], 409);
        assert!(value["respObj"].is_null());
        assert_eq!(value["error"]["kind"], "functional");
    }

    #[test]
    fn test_untagged_payload_round_trip() {
        let ingredient = Ingredient {
            id: "i-1".to_string(),
            name: "Potato".to_string(),
            description: String::new(),
            quantity: 2,
        };
        let envelope = HraResponse::success(
            200,
            "Query completed",
            Some(ResponseObject::Ingredient(ingredient.clone())),
        );

        let json = serde_json::to_string(&envelope).unwrap();
        let back: HraResponse = serde_json::from_str(&json).unwrap();
        match back.resp_obj {
            Some(ResponseObject::Ingredient(i)) => assert_eq!(i, ingredient),
            other => panic!("unexpected payload: {:?}", other),
        }
    }
}
