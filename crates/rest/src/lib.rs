//! # hrs-rest - HTTP API for the Home Recipes Service
//!
//! This crate implements the HTTP/JSON surface of the service: a router
//! that decodes requests and serializes response envelopes, and a worker
//! that executes CRUD operations against an injected
//! [`DocumentStorage`](hrs_persistence::DocumentStorage) backend.
//!
//! ## API Endpoints
//!
//! | Verb | Path | Success | Failure |
//! |------|------|---------|---------|
//! | POST | `/hrs/recipes` | 201 + envelope | 409 (decode), 409/500 (storage) |
//! | GET | `/hrs/recipes/{id}` | 200 + envelope | 409 (empty id / not found), 500 |
//! | PATCH | `/hrs/recipes/{id}` | 200 + envelope | 409, 500 |
//! | DELETE | `/hrs/recipes/{id}` | 204, empty body | 409, 500 |
//! | * | `/hrs/ingredients[...]` | mirrors recipes | mirrors recipes |
//! | GET | `/hrs/status` | 200, literal body | - |
//!
//! Every response except 204 carries the envelope: a status (code +
//! description), an optional payload, and an optional error tagged
//! `functional`, `technical`, or `fatal`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use hrs_persistence::backends::memory::MemoryBackend;
//! use hrs_rest::{ServerConfig, create_app};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(Arc::new(MemoryBackend::new()));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8089").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod mapper;
pub mod routing;
pub mod state;
pub mod worker;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use state::AppState;
pub use worker::Worker;

use std::sync::Arc;

use axum::Router;
use hrs_persistence::DocumentStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: Arc<S>) -> Router
where
    S: DocumentStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
pub fn create_app_with_config<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStorage + 'static,
{
    info!(backend = storage.backend_name(), "Creating API router");

    let enable_cors = config.enable_cors;
    let request_timeout = config.request_timeout;

    let state = AppState::new(storage, config);
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            request_timeout,
        )));

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.layer(service_builder)
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hrs={level},hrs_rest={level},hrs_persistence={level},tower_http=debug")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
