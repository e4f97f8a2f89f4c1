//! Configuration types for the payroll service.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! field has a default so a partial (or absent) file still yields a usable
//! configuration. Tax rates and brackets are statutory and deliberately absent.

use serde::Deserialize;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind (e.g. "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl EngineConfig {
    /// Returns the `host:port` address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
