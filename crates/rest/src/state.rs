//! Shared application state.

use std::sync::Arc;

use hrs_persistence::DocumentStorage;

use crate::config::ServerConfig;
use crate::worker::Worker;

/// State shared across all request handlers.
///
/// Holds the worker (which owns the storage backend) and the server
/// configuration.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`DocumentStorage`])
pub struct AppState<S> {
    worker: Arc<Worker<S>>,
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S lives behind an Arc and need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            worker: Arc::clone(&self.worker),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            worker: Arc::new(Worker::new(storage)),
            config: Arc::new(config),
        }
    }

    /// Returns the worker.
    pub fn worker(&self) -> &Worker<S> {
        &self.worker
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use hrs_persistence::backends::memory::MemoryBackend;

    use super::*;

    #[test]
    fn test_app_state_creation() {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::new(backend, ServerConfig::default());

        assert_eq!(state.worker().backend_name(), "memory");
        assert_eq!(state.config().port, 8089);
    }

    #[test]
    fn test_app_state_clone_shares_worker() {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::new(backend, ServerConfig::for_testing());
        let cloned = state.clone();

        assert!(std::ptr::eq(state.worker(), cloned.worker()));
    }
}
