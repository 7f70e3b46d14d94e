//! Liveness endpoint.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Literal body returned by the liveness endpoint.
pub const STATUS_BODY: &str = "Home Recipes Service: alive\n";

/// `GET /hrs/status` - plain-text liveness check for monitors and load
/// balancers; always 200.
pub async fn status_handler() -> impl IntoResponse {
    (StatusCode::OK, STATUS_BODY)
}
