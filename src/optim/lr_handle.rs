//! Shared learning-rate slot
//!
//! A training loop and a callback both need to see the same rate: the
//! callback writes it, the loop reads it when applying updates. The value
//! lives in an atomic so the handle is cheap to clone and `Send + Sync`.

use super::Optimizer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cloneable handle to a single learning-rate value
#[derive(Clone, Debug)]
pub struct LrHandle {
    bits: Arc<AtomicU64>,
}

impl LrHandle {
    /// Create a handle holding `lr`
    pub fn new(lr: f64) -> Self {
        Self { bits: Arc::new(AtomicU64::new(lr.to_bits())) }
    }

    /// Read the current rate
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Overwrite the current rate
    pub fn set(&self, lr: f64) {
        self.bits.store(lr.to_bits(), Ordering::Release);
    }
}

impl Default for LrHandle {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Optimizer for LrHandle {
    fn lr(&self) -> f64 {
        self.get()
    }

    fn set_lr(&mut self, lr: f64) {
        self.set(lr);
    }
}
