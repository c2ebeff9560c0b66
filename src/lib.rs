//! # sgdr
//!
//! Warm-restart learning-rate scheduling with alternating warmup and
//! cooldown phases.
//!
//! Each phase runs for a whole number of epochs. Warmup ramps the rate
//! linearly from the floor to the current ceiling; cooldown anneals it back
//! down along a half cosine. Phase lengths grow geometrically at every
//! restart and the ceiling shrinks shortly before each restart.
//!
//! ## Modules
//!
//! - [`optim`]: optimizer capability, rate handle and the scheduler itself
//! - [`train`]: callback plumbing, per-step history and an epoch driver
//! - [`config`]: YAML schedule files, validation and CLI arguments
//! - [`cli`]: command handlers for the `sgdr` binary
//!
//! ## Example
//!
//! ```
//! use sgdr::config::SgdrConfig;
//! use sgdr::optim::{LrHandle, Optimizer, SgdrScheduler};
//! use sgdr::train::Logs;
//!
//! let config = SgdrConfig::builder()
//!     .rates(0.001, 0.1)
//!     .steps_per_epoch(10)
//!     .warmup(1.0, 1.0)
//!     .build();
//!
//! let mut scheduler = SgdrScheduler::new(&config);
//! let mut lr = LrHandle::default();
//! scheduler.on_train_begin(&mut lr);
//!
//! for _ in 0..10 {
//!     scheduler.on_step(&mut lr, &Logs::new());
//! }
//! assert!(lr.lr() > 0.09);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod optim;
pub mod train;

pub use error::{Result, SgdrError};
