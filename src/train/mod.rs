//! Training-loop integration
//!
//! This module connects the schedule to a training loop:
//! - Callback hooks and dispatch
//! - Per-step metric history
//! - A model-free driver that replays a schedule
//!
//! # Example
//!
//! ```rust
//! use sgdr::config::SgdrConfig;
//! use sgdr::train::ScheduleDriver;
//!
//! let config = SgdrConfig::builder().rates(1e-4, 1e-2).steps_per_epoch(50).build();
//! let trace = ScheduleDriver::new(config).run(4);
//!
//! assert_eq!(trace.rates().len(), 200);
//! ```

pub mod callback;
mod driver;
mod history;

pub use callback::{CallbackAction, CallbackContext, CallbackManager, SgdrCallback, TrainerCallback};
pub use driver::{EpochRecord, ScheduleDriver, ScheduleTrace};
pub use history::{History, Logs, LR_KEY};
