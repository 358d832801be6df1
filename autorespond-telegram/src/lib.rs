//! # autorespond-telegram
//!
//! Telegram transport layer: adapters, [`autorespond_core::Bot`] implementation and the REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; trigger logic lives in autorespond.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{is_self_author, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{process_message, run_repl};
