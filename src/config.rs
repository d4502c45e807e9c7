use crate::context::LogContext;
use crate::error::{TagLogError, TagLogResult};
use crate::host::RegisterOptions;
use crate::logger::Logger;
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Environment variable toggling the console sink.
pub const ENV_ENABLED: &str = "TAGLOG_ENABLED";

/// Environment variable holding comma-separated default tags.
pub const ENV_DEFAULT_TAGS: &str = "TAGLOG_DEFAULT_TAGS";

/// Logger configuration for an application or host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console sink output on or off
    pub enabled: bool,
    /// Tags every logger built from this config starts with
    pub default_tags: Vec<String>,
    /// Passed on to [`RegisterOptions::request_scoped`]
    pub request_scoped: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_tags: Vec::new(),
            request_scoped: true,
        }
    }
}

impl LoggerConfig {
    /// Load configuration from environment variables
    /// This is the ONLY method that should access environment variables
    ///
    /// # Errors
    ///
    /// Returns [`TagLogError::InvalidEnvironment`] if `TAGLOG_ENABLED` is not a
    /// recognizable boolean.
    ///
    /// Returns [`TagLogError::ConfigurationError`] if the resulting
    /// configuration fails [`validate`](Self::validate).
    pub fn from_env() -> TagLogResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_ENABLED) {
            config.enabled = parse_bool(&raw)
                .ok_or_else(|| TagLogError::invalid_environment(ENV_ENABLED, raw.clone()))?;
        }
        if let Ok(raw) = std::env::var(ENV_DEFAULT_TAGS) {
            config.default_tags = split_tags(&raw);
        }

        config.validate()?;

        log_debug!(
            enabled = config.enabled,
            tag_count = config.default_tags.len(),
            "Logger configuration loaded from environment"
        );
        Ok(config)
    }

    /// Parse configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`TagLogError::ConfigurationError`] if the JSON is malformed or
    /// the configuration fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> TagLogResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            TagLogError::configuration_error(format!("Invalid logger config JSON: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tags that would produce unreadable records
    ///
    /// # Errors
    ///
    /// Returns [`TagLogError::ConfigurationError`] for blank tags or tags
    /// containing a line break.
    pub fn validate(&self) -> TagLogResult<()> {
        for (index, tag) in self.default_tags.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(TagLogError::configuration_error(format!(
                    "Default tag at position {index} is blank"
                )));
            }
            if tag.contains(['\n', '\r']) {
                return Err(TagLogError::configuration_error(format!(
                    "Default tag {tag:?} contains a line break"
                )));
            }
        }
        Ok(())
    }

    /// Apply the enabled flag to `context`.
    pub fn apply(&self, context: &LogContext) {
        context.set_enabled(self.enabled);
    }

    /// Logger with the default tags on the process-wide context.
    pub fn logger(&self) -> Logger {
        Logger::new(self.default_tags.clone())
    }

    /// Logger with the default tags on `context`.
    pub fn logger_in(&self, context: Arc<LogContext>) -> Logger {
        Logger::with_context(context, self.default_tags.clone())
    }

    pub fn register_options(&self) -> RegisterOptions {
        RegisterOptions {
            request_scoped: self.request_scoped,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
