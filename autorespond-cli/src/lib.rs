//! # autorespond-cli
//!
//! Argument parsing, env-based config loading and wiring of the auto-respond bot.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, run_bot, run_offline};
pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
