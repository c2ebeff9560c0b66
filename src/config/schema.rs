//! YAML schema for warm-restart schedules

use crate::optim::Phase;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

fn default_one() -> f64 {
    1.0
}

fn default_min_rate() -> f64 {
    1e-5
}

fn default_max_rate() -> f64 {
    1e-3
}

fn default_steps_per_epoch() -> usize {
    100
}

/// One-time change of the cooldown length policy
///
/// When the number of cooldowns entered so far equals `after_cooldowns`,
/// the next cooldown restarts from `length` and grows by `growth` from then
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownSwitch {
    /// Cooldowns entered before the switch applies
    pub after_cooldowns: u32,
    /// Replacement cooldown length (epochs)
    pub length: f64,
    /// Replacement cooldown growth factor
    #[serde(default = "default_one")]
    pub growth: f64,
}

/// Complete warm-restart schedule configuration
///
/// Lengths are in epochs and may be fractional; they are rounded up
/// whenever they grow at a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgdrConfig {
    /// Floor of every phase
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,

    /// Initial ceiling; shrinks before restarts
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,

    /// Optimization steps per epoch
    #[serde(default = "default_steps_per_epoch")]
    pub steps_per_epoch: usize,

    /// Phase the schedule opens with
    #[serde(default)]
    pub start_phase: Phase,

    /// Warmup length (epochs)
    #[serde(default = "default_one")]
    pub warmup_length: f64,

    /// Warmup growth factor applied on every warmup entry
    #[serde(default = "default_one")]
    pub warmup_growth: f64,

    /// Cooldown length before any growth (epochs)
    #[serde(default = "default_one")]
    pub initial_cooldown_length: f64,

    /// Cooldown growth factor applied on every cooldown entry
    #[serde(default = "default_one")]
    pub cooldown_growth: f64,

    /// Ceiling multiplier for the one-time first drop
    #[serde(default = "default_one")]
    pub first_drop_multiplier: f64,

    /// Ceiling multiplier for every later drop
    #[serde(default = "default_one")]
    pub general_decay_multiplier: f64,

    /// Pin warmup to one epoch once the first drop happened
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub disable_post_warmup_growth: bool,

    /// Optional one-time cooldown policy switch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_switch: Option<CooldownSwitch>,

    /// Report restarts at info level instead of debug
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub verbose: bool,
}

impl Default for SgdrConfig {
    fn default() -> Self {
        Self {
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            steps_per_epoch: default_steps_per_epoch(),
            start_phase: Phase::Warmup,
            warmup_length: 1.0,
            warmup_growth: 1.0,
            initial_cooldown_length: 1.0,
            cooldown_growth: 1.0,
            first_drop_multiplier: 1.0,
            general_decay_multiplier: 1.0,
            disable_post_warmup_growth: false,
            post_switch: None,
            verbose: false,
        }
    }
}
