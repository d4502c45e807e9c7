//! Error types for taglog.
//!
//! Logging itself never fails: severity calls return `()` and sinks swallow
//! their own I/O errors. [`TagLogError`] only covers the fallible edges of the
//! crate, which are configuration loading and severity parsing.
//!
//! # Example
//!
//! ```rust
//! use taglog::{LoggerConfig, TagLogResult};
//!
//! fn load() -> TagLogResult<LoggerConfig> {
//!     let config = LoggerConfig::from_json(r#"{"default_tags": ["api"]}"#)?;
//!     config.validate()?;
//!     Ok(config)
//! }
//! # load().unwrap();
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied something invalid (bad config value, unknown name).
    ///
    /// Fix the input and try again; retrying unchanged will fail the same way.
    Client,
}

/// Convenient result type for taglog operations.
pub type TagLogResult<T> = std::result::Result<T, TagLogError>;

/// Errors raised by taglog's configuration and parsing surface.
///
/// Use the constructor methods, which log the error when it is created:
///
/// ```rust
/// use taglog::TagLogError;
///
/// let err = TagLogError::unknown_severity("fatal");
/// assert_eq!(err.to_string(), "Unknown severity: fatal");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagLogError {
    /// Logger configuration is invalid or incomplete.
    #[error("Logger configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {variable}: {value:?}")]
    InvalidEnvironment {
        /// The variable name.
        variable: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A severity name outside `info, debug, error, warn, trace`.
    #[error("Unknown severity: {name}")]
    UnknownSeverity {
        /// The name that was given.
        name: String,
    },
}

impl TagLogError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::InvalidEnvironment { .. } => ErrorCategory::Client,
            Self::UnknownSeverity { .. } => ErrorCategory::Client,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Logger configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    /// Create an invalid environment error (logs at ERROR level).
    pub fn invalid_environment(variable: impl Into<String>, value: impl Into<String>) -> Self {
        let variable = variable.into();
        let value = value.into();
        log_error!(
            error_type = "invalid_environment",
            variable = %variable,
            value = %value,
            "Logger environment variable could not be parsed"
        );
        Self::InvalidEnvironment { variable, value }
    }

    /// Unknown severity names are common when probing tags, so this only warns.
    pub fn unknown_severity(name: impl Into<String>) -> Self {
        let name = name.into();
        log_warn!(
            error_type = "unknown_severity",
            name = %name,
            "Unrecognized severity name"
        );
        Self::UnknownSeverity { name }
    }
}
