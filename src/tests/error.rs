// Unit Tests for taglog Error Handling
//
// UNIT UNDER TEST: TagLogError
//
// BUSINESS RESPONSIBILITY:
//   - Reports configuration and parsing failures with their context
//   - Categorizes every error for handling decisions
//
// TEST COVERAGE:
//   - Constructor functions preserve context
//   - Display messages
//   - Categorization

use crate::error::{ErrorCategory, TagLogError};

#[cfg(test)]
mod tag_log_error_tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        // Arrange & Act
        let error = TagLogError::configuration_error("Default tag at position 0 is blank");

        // Assert
        assert_eq!(
            error.to_string(),
            "Logger configuration error: Default tag at position 0 is blank"
        );
        assert_eq!(error.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_invalid_environment_preserves_variable_and_value() {
        let error = TagLogError::invalid_environment("TAGLOG_ENABLED", "maybe");

        assert_eq!(error.to_string(), "Invalid value for TAGLOG_ENABLED: \"maybe\"");
        match error {
            TagLogError::InvalidEnvironment { variable, value } => {
                assert_eq!(variable, "TAGLOG_ENABLED");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_severity_is_client_error() {
        let error = TagLogError::unknown_severity("fatal");

        assert_eq!(error.to_string(), "Unknown severity: fatal");
        assert_eq!(error.category(), ErrorCategory::Client);
    }
}
