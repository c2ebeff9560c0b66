//! Learning rate schedulers
//!
//! Provides the warm-restart schedule and the curves it is built from:
//! - `linear_warmup` - Linear ramp between two rates
//! - `cosine_anneal` - Cosine decay between two rates
//! - `SgdrScheduler` - Alternating warmup/cooldown phases with restarts

mod anneal;
mod phase;
mod sgdr;

#[cfg(test)]
mod proptests;

pub use anneal::{cosine_anneal, linear_warmup};
pub use phase::Phase;
pub use sgdr::{DropKind, PhaseTransition, SgdrScheduler};

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f64;

    /// Step the scheduler (typically called after each epoch or batch)
    fn step(&mut self);
}
