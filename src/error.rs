//! Error types for the Gratuity Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around a gratuity calculation.
//! Missing inputs never abort the engine itself (it simply produces no
//! result); [`EngineError::IncompleteInput`] exists so callers such as the
//! HTTP layer can report which fields were absent.

use thiserror::Error;

/// The main error type for the Gratuity Engine.
///
/// # Example
///
/// ```
/// use gratuity_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
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

    /// The accrual rules were parsed but cannot be used for calculation.
    #[error("Invalid accrual rule '{field}': {message}")]
    InvalidRules {
        /// The rule field that was invalid.
        field: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A contract type value was not one of the supported selector values.
    #[error("Unknown contract type: {value}")]
    InvalidContractType {
        /// The value that could not be recognised.
        value: String,
    },

    /// One or more calculation inputs were missing, zero or unparseable.
    #[error("Incomplete input: missing {}", .fields.join(", "))]
    IncompleteInput {
        /// Names of the inputs that were absent.
        fields: Vec<String>,
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
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
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
    fn test_invalid_rules_displays_field_and_message() {
        let error = EngineError::InvalidRules {
            field: "daily_wage_divisor".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid accrual rule 'daily_wage_divisor': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_contract_type_displays_value() {
        let error = EngineError::InvalidContractType {
            value: "permanent".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown contract type: permanent");
    }

    #[test]
    fn test_incomplete_input_lists_fields() {
        let error = EngineError::IncompleteInput {
            fields: vec!["basic_salary".to_string(), "contract_type".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Incomplete input: missing basic_salary, contract_type"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
