//! Error types with actionable diagnostics.
//!
//! The schedule controller itself never fails: its inputs are trusted and
//! degenerate values surface as non-finite rates. These errors cover the
//! layers around it (config files, validation, export).

use crate::config::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sgdr operations.
pub type Result<T> = std::result::Result<T, SgdrError>;

/// Errors raised while loading, validating or exporting schedules.
#[derive(Error, Debug)]
pub enum SgdrError {
    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create one with `sgdr init` or check the path")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Schedule configuration failed validation.
    #[error("Invalid schedule: {0}")]
    Validation(#[from] ValidationError),

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SgdrError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::Validation(_)
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::Validation(_) => "E004",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

impl From<serde_json::Error> for SgdrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

impl From<csv::Error> for SgdrError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

impl From<serde_yaml::Error> for SgdrError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = vec![
            SgdrError::ConfigNotFound { path: "".into() },
            SgdrError::ConfigParsing { path: "".into(), message: "".into() },
            SgdrError::Validation(ValidationError::ZeroStepsPerEpoch),
            SgdrError::io("x", std::io::Error::new(std::io::ErrorKind::Other, "x")),
            SgdrError::Serialization { message: "".into() },
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_user_errors_are_recoverable() {
        assert!(SgdrError::ConfigNotFound { path: "".into() }.is_user_error());
        assert!(SgdrError::Validation(ValidationError::ZeroStepsPerEpoch).is_user_error());
        assert!(!SgdrError::Serialization { message: "".into() }.is_user_error());
    }

    #[test]
    fn test_io_error_constructor() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SgdrError::io("reading config", io_err);

        assert!(matches!(err, SgdrError::Io { .. }));
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn test_config_not_found_mentions_init() {
        let err = SgdrError::ConfigNotFound { path: "/tmp/sched.yaml".into() };
        let msg = err.to_string();
        assert!(msg.contains("sched.yaml"));
        assert!(msg.contains("sgdr init"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: SgdrError = ValidationError::ZeroStepsPerEpoch.into();
        assert!(matches!(err, SgdrError::Validation(_)));
        assert!(err.to_string().contains("steps_per_epoch"));
    }

    #[test]
    fn test_yaml_error_converts_to_serialization() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: SgdrError = yaml_err.into();
        assert_eq!(err.code(), "E051");
    }
}
