//! Error types for the bot core.

use thiserror::Error;

/// Errors surfaced by handlers and the outbound transport.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
