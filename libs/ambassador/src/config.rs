//! Ambassador configuration
//!
//! Supports both programmatic and file-based (TOML) configuration

use std::path::Path;
use std::time::Duration;

use hla_fabric::Endpoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How a federate reaches its local coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbassadorConfig {
    /// Socket the coordinator listens on
    pub endpoint: Endpoint,

    /// Bound on connection setup in milliseconds
    ///
    /// Calls made after setup are never timed out.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Label attached to log records until the federate joins
    #[serde(default = "default_federate_label")]
    pub federate_label: String,
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_federate_label() -> String {
    "unjoined".to_string()
}

impl AmbassadorConfig {
    /// Configuration for a coordinator on a Unix socket
    pub fn unix(path: impl AsRef<Path>) -> Self {
        Self::with_endpoint(Endpoint::Unix {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Configuration for a coordinator on a TCP port
    pub fn tcp(address: std::net::SocketAddr) -> Self {
        Self::with_endpoint(Endpoint::Tcp { address })
    }

    fn with_endpoint(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            connect_timeout_ms: default_connect_timeout_ms(),
            federate_label: default_federate_label(),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "connect_timeout_ms must be greater than zero".into(),
            ));
        }
        if let Endpoint::Unix { path } = &self.endpoint {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("unix endpoint path is empty".into()));
            }
        }
        if self.federate_label.trim().is_empty() {
            return Err(ConfigError::Invalid("federate_label is empty".into()));
        }
        Ok(())
    }
}
