//! Error types for the payroll engine.
//!
//! The calculation path itself never fails: malformed amounts fall back to
//! zero. Errors only arise in the surrounding layers (configuration loading,
//! tax schedule construction) and are modelled here with `thiserror`.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use nomina_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/nomina.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/nomina.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the service cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, in dotted form (e.g. `server.port`).
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An income tax schedule was malformed.
    #[error("Invalid tax schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/nomina.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/nomina.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "server.port".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'server.port': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_schedule_displays_message() {
        let error = EngineError::InvalidSchedule {
            message: "no brackets".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid tax schedule: no brackets");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_schedule_error() -> EngineResult<()> {
            Err(EngineError::InvalidSchedule {
                message: "empty".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_schedule_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
