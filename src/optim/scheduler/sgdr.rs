//! Stochastic gradient descent with warm restarts, alternating warmup phases

use super::anneal::{cosine_anneal, linear_warmup};
use super::{LRScheduler, Phase};
use crate::config::{CooldownSwitch, SgdrConfig};
use crate::optim::Optimizer;
use crate::train::{History, Logs, LR_KEY};
use serde::{Deserialize, Serialize};

/// Active phase together with the steps taken inside it.
///
/// Only one counter exists at a time, so a restart cannot leave stale
/// progress behind in the phase being left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    Warmup { steps: u64 },
    Cooldown { steps: u64 },
}

impl Progress {
    fn start(phase: Phase) -> Self {
        match phase {
            Phase::Warmup => Progress::Warmup { steps: 0 },
            Phase::Cooldown => Progress::Cooldown { steps: 0 },
        }
    }

    fn phase(self) -> Phase {
        match self {
            Progress::Warmup { .. } => Phase::Warmup,
            Progress::Cooldown { .. } => Phase::Cooldown,
        }
    }

    fn steps(self) -> u64 {
        match self {
            Progress::Warmup { steps } | Progress::Cooldown { steps } => steps,
        }
    }

    fn advance(&mut self) {
        match self {
            Progress::Warmup { steps } | Progress::Cooldown { steps } => *steps += 1,
        }
    }
}

/// Which ceiling reduction an epoch boundary applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropKind {
    /// One-time `first_drop_multiplier` reduction
    First,
    /// Recurring `general_decay_multiplier` reduction
    General,
}

/// What happened at an epoch boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseTransition {
    /// Phase entered by a restart at this boundary
    pub restart: Option<Phase>,
    /// Ceiling reduction applied at this boundary
    pub drop: Option<DropKind>,
}

impl PhaseTransition {
    /// Whether the phase flipped
    pub fn restarted(&self) -> bool {
        self.restart.is_some()
    }
}

/// Warm-restart scheduler with alternating warmup and cooldown phases
///
/// Warmup ramps linearly from `min_rate` to the current ceiling; cooldown
/// anneals back down on a cosine. Each restart flips the phase and grows the
/// entered phase's length. One epoch before every restart the ceiling
/// shrinks: once by `first_drop_multiplier`, afterwards by
/// `general_decay_multiplier`.
///
/// Hooks must be called in training order: [`on_train_begin`] once, then
/// [`on_step`] after every optimization step and [`on_epoch_end`] after the
/// last step of each epoch.
///
/// Inputs are not validated. Zero lengths or `steps_per_epoch == 0` yield
/// non-finite rates.
///
/// [`on_train_begin`]: SgdrScheduler::on_train_begin
/// [`on_step`]: SgdrScheduler::on_step
/// [`on_epoch_end`]: SgdrScheduler::on_epoch_end
#[derive(Debug, Clone)]
pub struct SgdrScheduler {
    progress: Progress,
    start_phase: Phase,
    steps_per_epoch: usize,
    min_rate: f64,
    max_rate: f64,
    warmup_length: f64,
    warmup_growth: f64,
    cooldown_length: f64,
    cooldown_growth: f64,
    /// Completed-epoch count at which the next restart happens
    next_restart_epoch: f64,
    phase_occurrence_count: u32,
    post_switch_counter: u32,
    first_drop_multiplier: f64,
    general_decay_multiplier: f64,
    disable_post_warmup_growth: bool,
    post_switch: Option<CooldownSwitch>,
    verbose: bool,
    history: History,
}

impl SgdrScheduler {
    /// Create a scheduler positioned at the start of `config.start_phase`
    pub fn new(config: &SgdrConfig) -> Self {
        let next_restart_epoch = match config.start_phase {
            Phase::Warmup => config.warmup_length,
            Phase::Cooldown => config.initial_cooldown_length,
        };

        Self {
            progress: Progress::start(config.start_phase),
            start_phase: config.start_phase,
            steps_per_epoch: config.steps_per_epoch,
            min_rate: config.min_rate,
            max_rate: config.max_rate,
            warmup_length: config.warmup_length,
            warmup_growth: config.warmup_growth,
            cooldown_length: config.initial_cooldown_length,
            cooldown_growth: config.cooldown_growth,
            next_restart_epoch,
            phase_occurrence_count: 0,
            post_switch_counter: 0,
            first_drop_multiplier: config.first_drop_multiplier,
            general_decay_multiplier: config.general_decay_multiplier,
            disable_post_warmup_growth: config.disable_post_warmup_growth,
            post_switch: config.post_switch,
            verbose: config.verbose,
            history: History::new(),
        }
    }

    /// Rate for the current position inside the active phase
    pub fn rate_at_phase_progress(&self) -> f64 {
        let steps = self.progress.steps() as f64;
        let steps_per_epoch = self.steps_per_epoch as f64;
        match self.progress {
            Progress::Warmup { .. } => {
                let fraction = steps / (steps_per_epoch * self.warmup_length);
                linear_warmup(self.min_rate, self.max_rate, fraction)
            }
            Progress::Cooldown { .. } => {
                let fraction = steps / (steps_per_epoch * self.cooldown_length);
                cosine_anneal(self.min_rate, self.max_rate, fraction)
            }
        }
    }

    /// Start training from the bottom of the ramp
    pub fn on_train_begin<O: Optimizer + ?Sized>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.min_rate);
    }

    /// Write the next rate into `optimizer` and record the step
    ///
    /// `logs` carries caller metrics for this step; each is appended to the
    /// history under its own key. The reserved `"lr"` key always holds the
    /// rate read back from the optimizer.
    pub fn on_step<O: Optimizer + ?Sized>(&mut self, optimizer: &mut O, logs: &Logs) {
        optimizer.set_lr(self.rate_at_phase_progress());
        self.progress.advance();

        self.history.record_step(optimizer.lr(), logs);
    }

    /// Handle the end of epoch `epoch` (0-based index of the finished epoch)
    ///
    /// Restart check runs first; the pre-restart ceiling drop then compares
    /// against the possibly advanced restart epoch. The epoch `logs` get
    /// their `"lr"` entry set to the rate in effect on `optimizer`.
    pub fn on_epoch_end<O: Optimizer + ?Sized>(
        &mut self,
        epoch: usize,
        optimizer: &O,
        logs: &mut Logs,
    ) -> PhaseTransition {
        let completed = (epoch + 1) as f64;
        let mut transition = PhaseTransition::default();

        if completed == self.next_restart_epoch {
            let entered = self.restart();
            transition.restart = Some(entered);

            let lr = optimizer.lr();
            if self.verbose {
                tracing::info!(epoch = epoch + 1, lr, phase = %entered, "{entered} restart at epoch {}, lr {lr:.6}", epoch + 1);
            } else {
                tracing::debug!(epoch = epoch + 1, lr, phase = %entered, "restart");
            }
        }

        if completed == self.next_restart_epoch - 1.0 {
            transition.drop = Some(self.drop_ceiling());
        }

        logs.insert(LR_KEY.to_string(), optimizer.lr());
        transition
    }

    /// Flip the phase and schedule the following restart
    fn restart(&mut self) -> Phase {
        let entered = self.progress.phase().other();
        self.progress = Progress::start(entered);

        match entered {
            Phase::Warmup => {
                self.warmup_length = (self.warmup_length * self.warmup_growth).ceil();
                self.next_restart_epoch += self.warmup_length;
            }
            Phase::Cooldown => {
                if let Some(switch) = self.post_switch {
                    if self.post_switch_counter == switch.after_cooldowns {
                        self.cooldown_length = switch.length;
                        self.cooldown_growth = switch.growth;
                        tracing::debug!(
                            cooldowns = self.post_switch_counter,
                            length = switch.length,
                            growth = switch.growth,
                            "cooldown length policy switched"
                        );
                    }
                }
                self.cooldown_length = (self.cooldown_length * self.cooldown_growth).ceil();
                self.next_restart_epoch += self.cooldown_length;
                self.post_switch_counter += 1;
            }
        }

        entered
    }

    fn drop_ceiling(&mut self) -> DropKind {
        self.phase_occurrence_count += 1;

        // Equality, not a latch: the first drop is tied to one exact count.
        if self.phase_occurrence_count == self.start_phase.first_drop_at() {
            self.max_rate *= self.first_drop_multiplier;
            if self.disable_post_warmup_growth {
                self.warmup_length = 1.0;
                self.warmup_growth = 1.0;
            }
            DropKind::First
        } else {
            self.max_rate *= self.general_decay_multiplier;
            DropKind::General
        }
    }

    /// Apply the current phase rate to an optimizer without advancing
    pub fn apply<O: Optimizer + ?Sized>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.rate_at_phase_progress());
    }

    /// Active phase
    pub fn phase(&self) -> Phase {
        self.progress.phase()
    }

    /// Phase the schedule started in
    pub fn start_phase(&self) -> Phase {
        self.start_phase
    }

    /// Steps completed since the active phase began
    pub fn steps_into_phase(&self) -> u64 {
        self.progress.steps()
    }

    pub fn steps_per_epoch(&self) -> usize {
        self.steps_per_epoch
    }

    pub fn min_rate(&self) -> f64 {
        self.min_rate
    }

    /// Current rate ceiling
    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }

    /// Completed-epoch count at which the next restart happens
    pub fn next_restart_epoch(&self) -> f64 {
        self.next_restart_epoch
    }

    pub fn warmup_length(&self) -> f64 {
        self.warmup_length
    }

    pub fn warmup_growth(&self) -> f64 {
        self.warmup_growth
    }

    pub fn cooldown_length(&self) -> f64 {
        self.cooldown_length
    }

    pub fn cooldown_growth(&self) -> f64 {
        self.cooldown_growth
    }

    /// Pre-restart checks seen so far
    pub fn phase_occurrence_count(&self) -> u32 {
        self.phase_occurrence_count
    }

    /// Cooldown phases entered through a restart
    pub fn post_switch_counter(&self) -> u32 {
        self.post_switch_counter
    }

    /// Per-step log of applied rates and caller metrics
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl LRScheduler for SgdrScheduler {
    fn get_lr(&self) -> f64 {
        self.rate_at_phase_progress()
    }

    fn step(&mut self) {
        self.progress.advance();
    }
}
