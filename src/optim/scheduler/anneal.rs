//! Rate interpolation curves shared by the warm-restart phases

use std::f64::consts::PI;

/// Linear ramp from `min_rate` toward `max_rate`
///
/// Formula: lr = lr_min + (lr_max - lr_min) * fraction
///
/// `fraction` is not clamped: values past 1.0 extrapolate beyond `max_rate`.
pub fn linear_warmup(min_rate: f64, max_rate: f64, fraction: f64) -> f64 {
    min_rate + (max_rate - min_rate) * fraction
}

/// Cosine anneal from `max_rate` down to `min_rate`
///
/// Formula: lr = lr_min + 0.5 * (lr_max - lr_min) * (1 + cos(pi * fraction))
///
/// Monotone on `fraction` in [0, 1]; outside that range the curve turns
/// back up.
pub fn cosine_anneal(min_rate: f64, max_rate: f64, fraction: f64) -> f64 {
    min_rate + 0.5 * (max_rate - min_rate) * (1.0 + (fraction * PI).cos())
}
