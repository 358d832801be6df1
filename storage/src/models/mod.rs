//! Trigger data model.

mod trigger_entry;

pub use trigger_entry::{TriggerEntry, TriggerMap};
