//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::optim::Phase;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = SgdrConfig> {
    (
        (1e-6f64..1e-2, 1.01f64..100.0), // min_rate, ceiling ratio
        1usize..1000,                     // steps_per_epoch
        prop_oneof![Just(Phase::Warmup), Just(Phase::Cooldown)],
        (0.5f64..10.0, 0.5f64..3.0),      // warmup length/growth
        (0.5f64..10.0, 0.5f64..3.0),      // cooldown length/growth
        (0.01f64..=1.0, 0.01f64..=1.0),   // drop multipliers
        any::<bool>(),
    )
        .prop_map(
            |((min_rate, ratio), steps, start_phase, (wl, wg), (cl, cg), (first, general), pin)| {
                SgdrConfig {
                    min_rate,
                    max_rate: min_rate * ratio,
                    steps_per_epoch: steps,
                    start_phase,
                    warmup_length: if start_phase == Phase::Warmup { wl.ceil() } else { wl },
                    warmup_growth: wg,
                    initial_cooldown_length: if start_phase == Phase::Cooldown {
                        cl.ceil()
                    } else {
                        cl
                    },
                    cooldown_growth: cg,
                    first_drop_multiplier: first,
                    general_decay_multiplier: general,
                    disable_post_warmup_growth: pin,
                    post_switch: None,
                    verbose: false,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_steps_fails(config in arb_valid_config()) {
        let config = SgdrConfig { steps_per_epoch: 0, ..config };
        prop_assert_eq!(validate_config(&config), Err(ValidationError::ZeroStepsPerEpoch));
    }

    #[test]
    fn prop_swapped_rates_fail(config in arb_valid_config()) {
        let config = SgdrConfig { min_rate: config.max_rate, max_rate: config.min_rate, ..config };
        let is_bounds_error = matches!(
            validate_config(&config),
            Err(ValidationError::InvalidRateBounds { .. })
        );
        prop_assert!(is_bounds_error);
    }

    #[test]
    fn prop_non_positive_length_fails(config in arb_valid_config(), length in -10.0f64..=0.0) {
        let config = SgdrConfig { warmup_length: length, ..config };
        let is_length_error = matches!(
            validate_config(&config),
            Err(ValidationError::NonPositiveLength { field: "warmup_length", .. })
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn prop_fractional_start_length_fails(
        config in arb_valid_config(),
        whole in 1u32..10,
        part in 0.01f64..0.99,
    ) {
        let length = f64::from(whole) + part;
        let config = match config.start_phase {
            Phase::Warmup => SgdrConfig { warmup_length: length, ..config },
            Phase::Cooldown => SgdrConfig { initial_cooldown_length: length, ..config },
        };
        let is_fraction_error = matches!(
            validate_config(&config),
            Err(ValidationError::FractionalStartLength { .. })
        );
        prop_assert!(is_fraction_error);
    }
}
