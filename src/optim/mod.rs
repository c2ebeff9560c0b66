//! Optimizer-facing pieces: the learning-rate capability and schedulers

mod lr_handle;
mod optimizer;
mod scheduler;

pub use lr_handle::LrHandle;
pub use optimizer::Optimizer;
pub use scheduler::{
    cosine_anneal, linear_warmup, DropKind, LRScheduler, Phase, PhaseTransition, SgdrScheduler,
};
