//! Warm-restart scheduler callback

use super::traits::{CallbackAction, CallbackContext, TrainerCallback};
use crate::config::SgdrConfig;
use crate::optim::{Optimizer, PhaseTransition, SgdrScheduler};
use crate::train::Logs;

/// Callback that drives an [`SgdrScheduler`] from trainer events
///
/// The scheduler writes into `optimizer` on every step end and evaluates
/// restarts on every epoch end. Pass an [`LrHandle`](crate::optim::LrHandle)
/// as the optimizer to share the rate with the training loop.
///
/// # Example
///
/// ```rust
/// use sgdr::config::SgdrConfig;
/// use sgdr::optim::LrHandle;
/// use sgdr::train::callback::{CallbackContext, SgdrCallback, TrainerCallback};
///
/// let lr = LrHandle::default();
/// let config = SgdrConfig::builder().rates(1e-4, 1e-2).steps_per_epoch(10).build();
/// let mut callback = SgdrCallback::new(config, lr.clone());
///
/// callback.on_train_begin(&CallbackContext::default());
/// assert_eq!(lr.get(), 1e-4);
/// ```
pub struct SgdrCallback<O: Optimizer + Send> {
    scheduler: SgdrScheduler,
    optimizer: O,
    epoch_logs: Logs,
    last_transition: PhaseTransition,
}

impl<O: Optimizer + Send> SgdrCallback<O> {
    /// Build the scheduler from `config` and attach it to `optimizer`
    pub fn new(config: SgdrConfig, optimizer: O) -> Self {
        Self::from_scheduler(SgdrScheduler::new(&config), optimizer)
    }

    /// Attach an existing scheduler to `optimizer`
    pub fn from_scheduler(scheduler: SgdrScheduler, optimizer: O) -> Self {
        Self {
            scheduler,
            optimizer,
            epoch_logs: Logs::new(),
            last_transition: PhaseTransition::default(),
        }
    }

    /// Get current learning rate from the optimizer
    pub fn current_lr(&self) -> f64 {
        self.optimizer.lr()
    }

    pub fn scheduler(&self) -> &SgdrScheduler {
        &self.scheduler
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// Logs produced by the most recent epoch end
    pub fn epoch_logs(&self) -> &Logs {
        &self.epoch_logs
    }

    /// Outcome of the most recent epoch end
    pub fn last_transition(&self) -> PhaseTransition {
        self.last_transition
    }

    pub fn into_parts(self) -> (SgdrScheduler, O) {
        (self.scheduler, self.optimizer)
    }
}

impl<O: Optimizer + Send> TrainerCallback for SgdrCallback<O> {
    fn on_train_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        self.scheduler.on_train_begin(&mut self.optimizer);
        CallbackAction::Continue
    }

    fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        let mut logs = ctx.logs();
        self.last_transition = self.scheduler.on_epoch_end(ctx.epoch, &self.optimizer, &mut logs);
        self.epoch_logs = logs;
        CallbackAction::Continue
    }

    fn on_step_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        self.scheduler.on_step(&mut self.optimizer, &ctx.logs());
        CallbackAction::Continue
    }

    fn name(&self) -> &'static str {
        "SgdrCallback"
    }
}
