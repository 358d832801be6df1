//! Chain handlers: logging, `/autorespond` commands and trigger replies.
//!
//! Intended order: [`LoggingHandler`] → [`CommandHandler`] → [`TriggerHandler`], so a command is
//! answered before its text could ever be matched as a trigger.

mod command_handler;
mod logging;
mod trigger_handler;

pub use command_handler::CommandHandler;
pub use logging::LoggingHandler;
pub use trigger_handler::TriggerHandler;
