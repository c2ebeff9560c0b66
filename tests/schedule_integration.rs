//! Schedule Integration Tests
//!
//! Drives the warm-restart scheduler through the public API the way a
//! training loop would: YAML in, callbacks per step and epoch, rates out.

use approx::assert_abs_diff_eq;
use sgdr::config::{parse_config, validate_config, SgdrConfig};
use sgdr::optim::{DropKind, LrHandle, Optimizer, Phase};
use sgdr::train::{
    CallbackAction, CallbackContext, CallbackManager, ScheduleDriver, SgdrCallback,
    TrainerCallback,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCENARIO: &str = r"
min_rate: 0.001
max_rate: 0.1
steps_per_epoch: 100
start_phase: warmup
warmup_length: 2
warmup_growth: 1
initial_cooldown_length: 3
cooldown_growth: 1
first_drop_multiplier: 0.5
general_decay_multiplier: 0.9
";

fn scenario() -> SgdrConfig {
    let config = parse_config(SCENARIO, Path::new("scenario.yaml")).unwrap();
    validate_config(&config).unwrap();
    config
}

/// Optimizer stand-in that only tracks its rate
#[derive(Default)]
struct Momentum {
    lr: f64,
}

impl Optimizer for Momentum {
    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

/// Records the rate seen at every epoch end
struct EpochRates {
    seen: Arc<Mutex<Vec<f64>>>,
}

impl TrainerCallback for EpochRates {
    fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        self.seen.lock().unwrap().push(ctx.lr);
        CallbackAction::Continue
    }

    fn name(&self) -> &'static str {
        "EpochRates"
    }
}

/// Stops after a fixed number of epochs
struct StopAfter(usize);

impl TrainerCallback for StopAfter {
    fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        if ctx.epoch + 1 >= self.0 {
            CallbackAction::Stop
        } else {
            CallbackAction::Continue
        }
    }

    fn name(&self) -> &'static str {
        "StopAfter"
    }
}

#[test]
fn scenario_restarts_at_expected_epochs() {
    let trace = ScheduleDriver::new(scenario()).run(10);

    let restarts: Vec<_> = trace.restarts().map(|r| (r.epoch, r.restart.unwrap())).collect();
    assert_eq!(
        restarts,
        vec![
            (2, Phase::Cooldown),
            (5, Phase::Warmup),
            (7, Phase::Cooldown),
            (10, Phase::Warmup),
        ]
    );

    let first: Vec<_> = trace
        .epochs
        .iter()
        .filter(|r| r.drop == Some(DropKind::First))
        .map(|r| r.epoch)
        .collect();
    assert_eq!(first, vec![4]);
}

#[test]
fn scenario_rates_follow_both_curves() {
    let trace = ScheduleDriver::new(scenario()).run(5);
    let rates = trace.rates();
    assert_eq!(rates.len(), 500);

    // Warmup ramp across epochs 1-2; the ceiling decays to 0.09 after epoch 1.
    assert_abs_diff_eq!(rates[0], 0.001, epsilon = 1e-12);
    assert_abs_diff_eq!(rates[99], 0.050005, epsilon = 1e-12);
    assert!(rates[..100].windows(2).all(|w| w[1] > w[0]));
    assert!(rates[100..200].windows(2).all(|w| w[1] > w[0]));
    assert!(rates[100] < rates[99]);

    // Cooldown opens at the decayed ceiling and anneals down.
    assert_abs_diff_eq!(rates[200], 0.09, epsilon = 1e-12);
    assert!(rates[200..500].windows(2).all(|w| w[1] <= w[0] + 1e-15));
}

#[test]
fn callback_drives_any_optimizer() {
    let mut callback = SgdrCallback::new(scenario(), Momentum::default());
    let mut manager = CallbackManager::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    manager.add(EpochRates { seen: Arc::clone(&seen) });

    let mut ctx = CallbackContext { max_epochs: 3, steps_per_epoch: 100, ..Default::default() };
    callback.on_train_begin(&ctx);
    assert_eq!(callback.current_lr(), 0.001);

    for epoch in 0..3 {
        ctx.epoch = epoch;
        for step in 0..100 {
            ctx.step = step;
            ctx.loss = Some(1.0 / (1 + epoch * 100 + step) as f64);
            callback.on_step_end(&ctx);
        }
        ctx.lr = callback.current_lr();
        callback.on_epoch_end(&ctx);
        manager.on_epoch_end(&ctx);
    }

    assert_eq!(callback.scheduler().phase(), Phase::Cooldown);
    assert_eq!(callback.scheduler().history().steps(), 300);
    assert_eq!(callback.scheduler().history().get("loss").unwrap().len(), 300);
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[test]
fn shared_handle_sees_scheduler_writes() {
    let handle = LrHandle::new(0.5);
    let trainer_view = handle.clone();
    let mut callback = SgdrCallback::new(scenario(), handle);

    callback.on_train_begin(&CallbackContext::default());
    assert_eq!(trainer_view.get(), 0.001);

    for _ in 0..50 {
        callback.on_step_end(&CallbackContext::default());
    }
    assert_abs_diff_eq!(trainer_view.get(), 0.001 + 0.099 * 49.0 / 200.0, epsilon = 1e-12);
}

#[test]
fn driver_stops_when_asked() {
    let mut driver = ScheduleDriver::new(scenario());
    driver.add_callback(StopAfter(3));
    let trace = driver.run(10);

    assert!(trace.stopped_early);
    assert_eq!(trace.epochs.len(), 3);
    assert_eq!(trace.rates().len(), 300);
}

#[test]
fn post_switch_from_yaml() {
    let yaml = r"
min_rate: 0.0001
max_rate: 0.01
steps_per_epoch: 2
start_phase: cooldown
initial_cooldown_length: 1
post_switch:
  after_cooldowns: 1
  length: 5
  growth: 2
";
    let config = parse_config(yaml, Path::new("switch.yaml")).unwrap();
    validate_config(&config).unwrap();

    let trace = ScheduleDriver::new(config).run(15);
    let cooldowns: Vec<_> = trace
        .restarts()
        .filter(|r| r.restart == Some(Phase::Cooldown))
        .map(|r| (r.epoch, r.next_restart_epoch))
        .collect();
    assert_eq!(cooldowns, vec![(2, 3.0), (4, 14.0), (15, 35.0)]);
}
