//! Replaying a schedule without a model
//!
//! `ScheduleDriver` is the smallest loop that honours the hook contract:
//! train begin, then per epoch every step end followed by one epoch end. It
//! is what the CLI uses to print or export a schedule, and it is a handy
//! harness for checking a configuration before a real run.

use crate::config::SgdrConfig;
use crate::optim::{DropKind, LrHandle, Phase};
use crate::train::callback::{
    CallbackAction, CallbackContext, CallbackManager, SgdrCallback, TrainerCallback,
};
use crate::train::{History, LR_KEY};
use serde::Serialize;

/// Scheduler state observed right after an epoch end
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochRecord {
    /// Completed epochs (1-based)
    pub epoch: usize,
    /// Phase in effect for the next epoch
    pub phase: Phase,
    /// Rate in effect on the optimizer at the boundary
    pub lr: f64,
    /// Rate ceiling after any drop at this boundary
    pub max_rate: f64,
    pub next_restart_epoch: f64,
    /// Phase entered if a restart happened here
    pub restart: Option<Phase>,
    /// Ceiling drop applied here
    pub drop: Option<DropKind>,
}

/// Result of replaying a schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleTrace {
    pub epochs: Vec<EpochRecord>,
    pub history: History,
    /// Whether an extra callback requested a stop
    pub stopped_early: bool,
}

impl ScheduleTrace {
    /// Applied rate for every step
    pub fn rates(&self) -> &[f64] {
        self.history.lr()
    }

    /// Epoch boundaries where the phase flipped
    pub fn restarts(&self) -> impl Iterator<Item = &EpochRecord> {
        self.epochs.iter().filter(|record| record.restart.is_some())
    }
}

/// Minimal training loop driving an [`SgdrCallback`]
pub struct ScheduleDriver {
    config: SgdrConfig,
    callbacks: CallbackManager,
}

impl ScheduleDriver {
    pub fn new(config: SgdrConfig) -> Self {
        Self { config, callbacks: CallbackManager::new() }
    }

    /// Register an extra callback; it sees every event after the scheduler
    pub fn add_callback<C: TrainerCallback + 'static>(&mut self, callback: C) {
        self.callbacks.add(callback);
    }

    /// Replay `max_epochs` epochs of the schedule
    ///
    /// An extra callback answering `SkipEpoch` skips that epoch's steps; the
    /// epoch end still fires so restarts stay aligned with the epoch count.
    pub fn run(mut self, max_epochs: usize) -> ScheduleTrace {
        let lr = LrHandle::default();
        let steps_per_epoch = self.config.steps_per_epoch;
        let mut sgdr = SgdrCallback::new(self.config, lr.clone());
        let mut epochs = Vec::with_capacity(max_epochs);
        let mut stopped_early = false;
        let mut global_step = 0;

        sgdr.on_train_begin(&CallbackContext::default());
        let ctx = context(0, max_epochs, 0, steps_per_epoch, global_step, &lr);
        if self.callbacks.on_train_begin(&ctx) == CallbackAction::Stop {
            return finish(sgdr, epochs, true);
        }

        'epochs: for epoch in 0..max_epochs {
            let ctx = context(epoch, max_epochs, 0, steps_per_epoch, global_step, &lr);
            let skip = match self.callbacks.on_epoch_begin(&ctx) {
                CallbackAction::Stop => {
                    stopped_early = true;
                    break;
                }
                CallbackAction::SkipEpoch => true,
                CallbackAction::Continue => false,
            };

            if !skip {
                for step in 0..steps_per_epoch {
                    let ctx = context(epoch, max_epochs, step, steps_per_epoch, global_step, &lr);
                    if self.callbacks.on_step_begin(&ctx) == CallbackAction::Stop {
                        stopped_early = true;
                        break 'epochs;
                    }

                    sgdr.on_step_end(&ctx);
                    global_step += 1;

                    let ctx = context(epoch, max_epochs, step, steps_per_epoch, global_step, &lr);
                    if self.callbacks.on_step_end(&ctx) == CallbackAction::Stop {
                        stopped_early = true;
                        break 'epochs;
                    }
                }
            }

            let ctx = context(epoch, max_epochs, steps_per_epoch, steps_per_epoch, global_step, &lr);
            sgdr.on_epoch_end(&ctx);

            let transition = sgdr.last_transition();
            let scheduler = sgdr.scheduler();
            epochs.push(EpochRecord {
                epoch: epoch + 1,
                phase: scheduler.phase(),
                lr: sgdr.epoch_logs().get(LR_KEY).copied().unwrap_or_else(|| lr.get()),
                max_rate: scheduler.max_rate(),
                next_restart_epoch: scheduler.next_restart_epoch(),
                restart: transition.restart,
                drop: transition.drop,
            });

            if self.callbacks.on_epoch_end(&ctx) == CallbackAction::Stop {
                stopped_early = true;
                break;
            }
        }

        let ctx = context(epochs.len(), max_epochs, 0, steps_per_epoch, global_step, &lr);
        sgdr.on_train_end(&ctx);
        self.callbacks.on_train_end(&ctx);

        finish(sgdr, epochs, stopped_early)
    }
}

fn context(
    epoch: usize,
    max_epochs: usize,
    step: usize,
    steps_per_epoch: usize,
    global_step: usize,
    lr: &LrHandle,
) -> CallbackContext {
    CallbackContext {
        epoch,
        max_epochs,
        step,
        steps_per_epoch,
        global_step,
        lr: lr.get(),
        ..Default::default()
    }
}

fn finish(
    sgdr: SgdrCallback<LrHandle>,
    epochs: Vec<EpochRecord>,
    stopped_early: bool,
) -> ScheduleTrace {
    let (scheduler, _) = sgdr.into_parts();
    ScheduleTrace { epochs, history: scheduler.history().clone(), stopped_early }
}
