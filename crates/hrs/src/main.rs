//! Home Recipes Service
//!
//! A small HTTP/JSON CRUD server for recipes and ingredients.

use std::sync::Arc;

use clap::Parser;
use hrs_persistence::backends::memory::MemoryBackend;
use hrs_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(config.log_level());

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        "Starting Home Recipes Service"
    );

    match backend_mode {
        StorageBackendMode::Memory => start_memory(config).await?,
        StorageBackendMode::Mongodb => start_mongodb(config).await?,
    }

    Ok(())
}

/// Starts the server with the in-memory backend.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    let backend = Arc::new(MemoryBackend::new());
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Starts the server with the MongoDB backend.
#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    use hrs_persistence::StorageConfig;
    use hrs_persistence::backends::mongodb::MongoBackend;

    let storage_config = StorageConfig::from_file(&config.storage_config)?;
    info!(
        url = %storage_config.url,
        database = %storage_config.database,
        "Connecting to MongoDB"
    );

    let backend = Arc::new(MongoBackend::connect(&storage_config).await?);
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p hrs --features mongodb"
    )
}

/// Starts the Axum HTTP server and drains it when a termination signal
/// arrives.
///
/// A dedicated task waits for SIGINT/SIGTERM and sends on a oneshot channel
/// that the serve loop observes for graceful shutdown.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        wait_for_termination().await;
        info!("Shutdown signal received, stopping server...");
        let _ = shutdown_tx.send(());
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
#[cfg(unix)]
async fn wait_for_termination() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
