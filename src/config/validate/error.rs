//! Validation error types
//!
//! Defines all validation error variants for schedule configurations.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid steps_per_epoch: 0 (must be > 0)")]
    ZeroStepsPerEpoch,

    #[error("Invalid rate bounds: min_rate {min} / max_rate {max} (need 0.0 <= min_rate < max_rate)")]
    InvalidRateBounds { min: f64, max: f64 },

    #[error("Invalid {field}: {value} (must be > 0.0)")]
    NonPositiveLength { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} (the start phase needs a whole number of epochs)")]
    FractionalStartLength { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} (must be > 0.0)")]
    NonPositiveGrowth { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} (must be in (0.0, 1.0])")]
    MultiplierOutOfRange { field: &'static str, value: f64 },

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),
}
