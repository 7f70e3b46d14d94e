//! HTTP request handlers.
//!
//! Handlers decode the request, delegate to the worker, and serialize the
//! resulting envelope with the status code the worker chose. A body that
//! fails to decode short-circuits before any storage call.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hrs_types::{HraResponse, HrsError};
use tracing::debug;

pub mod ingredients;
pub mod recipes;
pub mod status;

pub use ingredients::*;
pub use recipes::*;
pub use status::*;

const DECODE_ERROR: &str = "Decode error";

/// Serializes an envelope with its own status code.
///
/// 204 responses carry no body; everything else carries the envelope.
pub(crate) fn envelope_response(envelope: HraResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if let Some(error) = &envelope.error {
        debug!(status = %status, error = %error, "Request failed");
    }

    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }
    (status, Json(envelope)).into_response()
}

/// Builds the envelope for an undecodable request body.
pub(crate) fn decode_error_response(rejection: JsonRejection) -> Response {
    debug!(detail = %rejection.body_text(), "Rejecting undecodable body");

    let envelope = HraResponse::failure(
        409,
        DECODE_ERROR,
        HrsError::functional(rejection.body_text()),
    );
    (StatusCode::CONFLICT, Json(envelope)).into_response()
}
