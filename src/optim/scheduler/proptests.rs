//! Property-based tests for the warm-restart scheduler

use super::*;
use crate::config::SgdrConfig;
use crate::optim::LrHandle;
use crate::train::Logs;
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = SgdrConfig> {
    (
        (1e-6f64..1e-2, 1.5f64..100.0),
        1usize..20,
        prop_oneof![Just(Phase::Warmup), Just(Phase::Cooldown)],
        (1.0f64..4.0, 1.0f64..2.5),
        (1.0f64..4.0, 1.0f64..2.5),
        (0.1f64..=1.0, 0.1f64..=1.0),
        any::<bool>(),
    )
        .prop_map(
            |((min_rate, ratio), steps, start, (wl, wg), (cl, cg), (first, general), pin)| {
                SgdrConfig::builder()
                    .rates(min_rate, min_rate * ratio)
                    .steps_per_epoch(steps)
                    .start_phase(start)
                    .warmup(wl.ceil(), wg)
                    .cooldown(cl.ceil(), cg)
                    .drops(first, general)
                    .disable_post_warmup_growth(pin)
                    .build()
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_ceiling_never_increases(config in arb_config(), epochs in 1usize..25) {
        let mut scheduler = SgdrScheduler::new(&config);
        let mut optimizer = LrHandle::default();
        let mut previous = scheduler.max_rate();

        for epoch in 0..epochs {
            for _ in 0..config.steps_per_epoch {
                scheduler.on_step(&mut optimizer, &Logs::new());
            }
            scheduler.on_epoch_end(epoch, &optimizer, &mut Logs::new());
            prop_assert!(scheduler.max_rate() <= previous);
            previous = scheduler.max_rate();
        }
    }

    #[test]
    fn prop_rates_stay_within_bounds_inside_phase(config in arb_config(), epochs in 1usize..25) {
        // Pinning can shorten a warmup that is already under way.
        let config = SgdrConfig { disable_post_warmup_growth: false, ..config };
        let mut scheduler = SgdrScheduler::new(&config);
        let mut optimizer = LrHandle::default();

        for epoch in 0..epochs {
            for _ in 0..config.steps_per_epoch {
                scheduler.on_step(&mut optimizer, &Logs::new());
                prop_assert!(optimizer.get() >= config.min_rate - 1e-12);
                prop_assert!(optimizer.get() <= config.max_rate + 1e-12);
            }
            scheduler.on_epoch_end(epoch, &optimizer, &mut Logs::new());
        }
    }

    #[test]
    fn prop_warmup_is_monotone(config in arb_config()) {
        let config = SgdrConfig { start_phase: Phase::Warmup, ..config };
        let mut scheduler = SgdrScheduler::new(&config);
        let mut optimizer = LrHandle::default();
        let steps = (config.steps_per_epoch as f64 * config.warmup_length) as usize;

        let mut previous = f64::NEG_INFINITY;
        for _ in 0..steps {
            scheduler.on_step(&mut optimizer, &Logs::new());
            prop_assert!(optimizer.get() >= previous);
            previous = optimizer.get();
        }
    }

    #[test]
    fn prop_cooldown_is_monotone(config in arb_config()) {
        let config = SgdrConfig { start_phase: Phase::Cooldown, ..config };
        let mut scheduler = SgdrScheduler::new(&config);
        let mut optimizer = LrHandle::default();
        let steps = (config.steps_per_epoch as f64 * config.initial_cooldown_length) as usize;

        let mut previous = f64::INFINITY;
        for _ in 0..steps {
            scheduler.on_step(&mut optimizer, &Logs::new());
            prop_assert!(optimizer.get() <= previous);
            previous = optimizer.get();
        }
    }

    #[test]
    fn prop_steps_never_restart(config in arb_config(), steps in 0usize..500) {
        let mut scheduler = SgdrScheduler::new(&config);
        let mut optimizer = LrHandle::default();
        let next = scheduler.next_restart_epoch();

        for _ in 0..steps {
            scheduler.on_step(&mut optimizer, &Logs::new());
        }
        prop_assert_eq!(scheduler.phase(), config.start_phase);
        prop_assert_eq!(scheduler.next_restart_epoch(), next);
        prop_assert_eq!(scheduler.history().steps(), steps);
    }

    #[test]
    fn prop_restarts_alternate(config in arb_config(), epochs in 1usize..30) {
        let mut scheduler = SgdrScheduler::new(&config);
        let mut optimizer = LrHandle::default();
        let mut expected = config.start_phase;

        for epoch in 0..epochs {
            for _ in 0..config.steps_per_epoch {
                scheduler.on_step(&mut optimizer, &Logs::new());
            }
            let transition = scheduler.on_epoch_end(epoch, &optimizer, &mut Logs::new());
            if let Some(entered) = transition.restart {
                expected = expected.other();
                prop_assert_eq!(entered, expected);
                prop_assert_eq!(scheduler.steps_into_phase(), 0);
                prop_assert!(scheduler.next_restart_epoch() > (epoch + 1) as f64);
            }
            prop_assert_eq!(scheduler.phase(), expected);
        }
    }
}
