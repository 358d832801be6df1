//! Storage crate: trigger persistence for the auto-respond bot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – TriggerEntry, TriggerMap
//! - [`trigger_store`] – TriggerStore (flat JSON file)

mod error;
mod models;
mod trigger_store;


pub use error::StorageError;
pub use models::{TriggerEntry, TriggerMap};
pub use trigger_store::{TriggerStore, DEFAULT_TRIGGERS_PATH};
