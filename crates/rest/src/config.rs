//! Server configuration.
//!
//! Configuration comes from command line arguments with environment variable
//! fallbacks. Database connection settings live in a separate JSON file
//! (see [`hrs_persistence::StorageConfig`]); this struct only carries its
//! path.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HRS_PORT` | 8089 | Server port |
//! | `HRS_HOST` | 127.0.0.1 | Host to bind |
//! | `HRS_BACKEND` | memory | Storage backend (memory, mongodb) |
//! | `HRS_STORAGE_CONFIG` | jsons/mongoconfig.json | Database settings file |
//! | `HRS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `HRS_ENABLE_CORS` | true | Enable CORS |

use clap::Parser;

/// Storage backend selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// In-process HashMap storage.
    Memory,
    /// MongoDB (requires the `mongodb` cargo feature).
    Mongodb,
}

impl std::fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendMode::Memory => write!(f, "memory"),
            StorageBackendMode::Mongodb => write!(f, "mongodb"),
        }
    }
}

/// Server configuration for the Home Recipes Service.
#[derive(Debug, Clone, Parser)]
#[command(name = "hrs")]
#[command(about = "Home Recipes Service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "HRS_PORT", default_value = "8089")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HRS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Storage backend (memory, mongodb).
    #[arg(long, env = "HRS_BACKEND", default_value = "memory")]
    pub backend: String,

    /// Path to the JSON file with database connection settings.
    #[arg(
        long = "config",
        env = "HRS_STORAGE_CONFIG",
        default_value = "jsons/mongoconfig.json"
    )]
    pub storage_config: String,

    /// Request timeout in seconds.
    #[arg(long, env = "HRS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "HRS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// If set, the log level is set to DEBUG.
    #[arg(short, long)]
    pub debug: bool,

    /// If set, the log level is set to ERROR.
    #[arg(short, long)]
    pub error: bool,

    /// If set, logging is silenced entirely.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8089,
            host: "127.0.0.1".to_string(),
            backend: "memory".to_string(),
            storage_config: "jsons/mongoconfig.json".to_string(),
            request_timeout: 30,
            enable_cors: true,
            debug: false,
            error: false,
            quiet: false,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the verbosity flags to a tracing filter level.
    ///
    /// `--quiet` wins over `--error`, which wins over `--debug`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "off"
        } else if self.error {
            "error"
        } else if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    /// Resolves the selected storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        match self.backend.as_str() {
            "memory" => Ok(StorageBackendMode::Memory),
            "mongodb" => Ok(StorageBackendMode::Mongodb),
            other => Err(format!(
                "unknown backend '{}' (expected: memory, mongodb)",
                other
            )),
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            request_timeout: 5,
            enable_cors: false,
            debug: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8089);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_level(), "info");
        assert_eq!(
            config.storage_backend_mode().unwrap(),
            StorageBackendMode::Memory
        );
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_verbosity_precedence() {
        let config = ServerConfig {
            debug: true,
            error: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), "off");

        let config = ServerConfig {
            debug: true,
            error: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), "error");

        let config = ServerConfig {
            debug: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_unknown_backend() {
        let config = ServerConfig {
            backend: "cassandra".to_string(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("cassandra")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.log_level(), "debug");
    }
}
