//! # autorespond
//!
//! Trigger/response auto-replies for the bot: the [`ResponderGate`] on/off switch, the
//! [`AutoResponder`] that owns the trigger store and the gate, the `/autorespond` command surface,
//! and the chain handlers that wire both into a [`handler_chain`]-style pipeline.
//!
//! One [`AutoResponder`] is built at startup and shared as `Arc<AutoResponder>` with every handler.

mod command;
mod gate;
mod handlers;
mod reply;
mod responder;

#[cfg(test)]
mod test;

pub use command::{AutorespondCommand, CommandParseError, COMMAND_NAME, USAGE};
pub use gate::{GateTransition, ResponderGate};
pub use handlers::{CommandHandler, LoggingHandler, TriggerHandler};
pub use reply::{Reply, ReplyField, Tone};
pub use responder::AutoResponder;
