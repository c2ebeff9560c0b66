//! Build schedules from configuration

use super::schema::{CooldownSwitch, SgdrConfig};
use crate::optim::{Phase, SgdrScheduler};

/// Build a scheduler from configuration
///
/// No validation happens here; run [`validate_config`](super::validate_config)
/// first when the values come from an untrusted source.
pub fn build_scheduler(config: &SgdrConfig) -> SgdrScheduler {
    SgdrScheduler::new(config)
}

/// Fluent construction of [`SgdrConfig`]
///
/// Starts from [`SgdrConfig::default`]; every setter overrides one group
/// of fields.
#[derive(Debug, Clone, Default)]
pub struct SgdrConfigBuilder {
    config: SgdrConfig,
}

impl SgdrConfig {
    pub fn builder() -> SgdrConfigBuilder {
        SgdrConfigBuilder::default()
    }
}

impl SgdrConfigBuilder {
    /// Rate floor and initial ceiling
    pub fn rates(mut self, min_rate: f64, max_rate: f64) -> Self {
        self.config.min_rate = min_rate;
        self.config.max_rate = max_rate;
        self
    }

    pub fn steps_per_epoch(mut self, steps: usize) -> Self {
        self.config.steps_per_epoch = steps;
        self
    }

    pub fn start_phase(mut self, phase: Phase) -> Self {
        self.config.start_phase = phase;
        self
    }

    /// Warmup length (epochs) and growth factor
    pub fn warmup(mut self, length: f64, growth: f64) -> Self {
        self.config.warmup_length = length;
        self.config.warmup_growth = growth;
        self
    }

    /// Initial cooldown length (epochs) and growth factor
    pub fn cooldown(mut self, initial_length: f64, growth: f64) -> Self {
        self.config.initial_cooldown_length = initial_length;
        self.config.cooldown_growth = growth;
        self
    }

    /// First-drop and general-decay ceiling multipliers
    pub fn drops(mut self, first: f64, general: f64) -> Self {
        self.config.first_drop_multiplier = first;
        self.config.general_decay_multiplier = general;
        self
    }

    pub fn disable_post_warmup_growth(mut self, disable: bool) -> Self {
        self.config.disable_post_warmup_growth = disable;
        self
    }

    /// Switch the cooldown policy once `after_cooldowns` cooldowns were entered
    pub fn post_switch(mut self, after_cooldowns: u32, length: f64, growth: f64) -> Self {
        self.config.post_switch = Some(CooldownSwitch { after_cooldowns, length, growth });
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> SgdrConfig {
        self.config
    }
}
