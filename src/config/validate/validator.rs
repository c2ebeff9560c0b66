//! Configuration validation logic
//!
//! Validates schedule configurations before they reach a scheduler. The
//! scheduler itself trusts its inputs; this is the gate for values read
//! from files or the command line.

use super::error::ValidationError;
use crate::config::schema::SgdrConfig;
use crate::optim::Phase;

/// Validate a schedule configuration
///
/// Checks:
/// - `steps_per_epoch` is non-zero
/// - Rates are finite with `0 <= min_rate < max_rate`
/// - Phase lengths and growth factors are positive and finite
/// - The start phase length is a whole number of epochs
/// - Ceiling multipliers lie in (0, 1]
pub fn validate_config(config: &SgdrConfig) -> Result<(), ValidationError> {
    if config.steps_per_epoch == 0 {
        return Err(ValidationError::ZeroStepsPerEpoch);
    }

    // NaN fails every comparison, so the negated forms reject it too.
    if !(config.min_rate >= 0.0 && config.min_rate < config.max_rate && config.max_rate.is_finite())
    {
        return Err(ValidationError::InvalidRateBounds {
            min: config.min_rate,
            max: config.max_rate,
        });
    }

    positive_length("warmup_length", config.warmup_length)?;
    positive_length("initial_cooldown_length", config.initial_cooldown_length)?;
    whole_start_length(config)?;
    positive_growth("warmup_growth", config.warmup_growth)?;
    positive_growth("cooldown_growth", config.cooldown_growth)?;

    multiplier("first_drop_multiplier", config.first_drop_multiplier)?;
    multiplier("general_decay_multiplier", config.general_decay_multiplier)?;

    if let Some(switch) = &config.post_switch {
        positive_length("post_switch.length", switch.length)?;
        positive_growth("post_switch.growth", switch.growth)?;
    }

    Ok(())
}

/// Validate the number of epochs to run
pub fn validate_epochs(epochs: usize) -> Result<(), ValidationError> {
    if epochs == 0 {
        return Err(ValidationError::InvalidEpochs(epochs));
    }
    Ok(())
}

/// Restarts fire on an integer epoch, so the first one must land on one.
/// Later lengths are rounded up when they grow.
fn whole_start_length(config: &SgdrConfig) -> Result<(), ValidationError> {
    let (field, value) = match config.start_phase {
        Phase::Warmup => ("warmup_length", config.warmup_length),
        Phase::Cooldown => ("initial_cooldown_length", config.initial_cooldown_length),
    };
    if value.fract() != 0.0 {
        return Err(ValidationError::FractionalStartLength { field, value });
    }
    Ok(())
}

fn positive_length(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(ValidationError::NonPositiveLength { field, value });
    }
    Ok(())
}

fn positive_growth(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(ValidationError::NonPositiveGrowth { field, value });
    }
    Ok(())
}

fn multiplier(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(ValidationError::MultiplierOutOfRange { field, value });
    }
    Ok(())
}
