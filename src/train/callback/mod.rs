//! Callback system for training events
//!
//! Provides extensible hooks for training loop events:
//! - `on_train_begin` / `on_train_end`
//! - `on_epoch_begin` / `on_epoch_end`
//! - `on_step_begin` / `on_step_end`
//!
//! # Example
//!
//! ```rust
//! use sgdr::train::callback::{CallbackAction, CallbackContext, TrainerCallback};
//!
//! struct PrintCallback;
//!
//! impl TrainerCallback for PrintCallback {
//!     fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
//!         println!("Epoch {} finished at lr {:.2e}", ctx.epoch + 1, ctx.lr);
//!         CallbackAction::Continue
//!     }
//! }
//! ```

mod manager;
mod scheduler;
mod traits;

pub use manager::CallbackManager;
pub use scheduler::SgdrCallback;
pub use traits::{CallbackAction, CallbackContext, TrainerCallback};
