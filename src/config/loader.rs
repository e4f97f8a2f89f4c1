//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::env;
use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "NOMINA_CONFIG";

/// Loads and provides access to the service configuration.
///
/// # File format
///
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 8080
/// logging:
///   filter: info
/// ```
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nomina.yaml")?;
/// println!("Listening on {}", loader.config().bind_address());
/// # Ok::<(), nomina_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML for
    ///   the expected structure
    /// - [`EngineError::InvalidConfig`] if a value is unusable
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        // an empty document deserializes to unit, not to a struct of defaults
        let config = if content.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str::<EngineConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads from the file named by `NOMINA_CONFIG`, or returns the defaults
    /// when the variable is unset.
    pub fn from_env() -> EngineResult<Self> {
        Self::load_optional(env::var_os(CONFIG_PATH_ENV))
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.server.host.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "server.host".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.server.port == 0 {
            return Err(EngineError::InvalidConfig {
                field: "server.port".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if config.logging.filter.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "logging.filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
            return Err(EngineError::InvalidConfig {
                field: "logging.filter".to_string(),
                message: e.to_string(),
            });
        }
        Ok(())
    }
}
