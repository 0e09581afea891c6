//! Domain error types
//!
//! This module defines the error hierarchy for Simulacrum.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Simulacrum error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum SimulacrumError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record to mask carries no usable subject identifier
    #[error("Missing subject identifier: {0}")]
    MissingSubjectId(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl SimulacrumError {
    /// Whether the error was caused by the caller's input rather than the environment
    ///
    /// The CLI maps these to the "invalid request" exit code.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::MissingSubjectId(_) | Self::Serialization(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SimulacrumError {
    fn from(err: std::io::Error) -> Self {
        SimulacrumError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SimulacrumError {
    fn from(err: serde_json::Error) -> Self {
        SimulacrumError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SimulacrumError {
    fn from(err: toml::de::Error) -> Self {
        SimulacrumError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimulacrumError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");

        let err = SimulacrumError::MissingSubjectId("record has no id".to_string());
        assert_eq!(
            err.to_string(),
            "Missing subject identifier: record has no id"
        );
    }

    #[test]
    fn test_caller_error_classification() {
        assert!(SimulacrumError::MissingSubjectId(String::new()).is_caller_error());
        assert!(SimulacrumError::Validation(String::new()).is_caller_error());
        assert!(!SimulacrumError::Io(String::new()).is_caller_error());
        assert!(!SimulacrumError::Configuration(String::new()).is_caller_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: SimulacrumError = io_err.into();
        assert!(matches!(err, SimulacrumError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SimulacrumError = json_err.into();
        assert!(matches!(err, SimulacrumError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: SimulacrumError = toml_err.into();
        assert!(matches!(err, SimulacrumError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = SimulacrumError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
