//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "autorespond")]
#[command(about = "Auto-respond Telegram bot: run the bot or manage its trigger file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Trigger file path (overrides TRIGGERS_PATH).
    #[arg(long, global = true)]
    pub triggers_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Show all auto-respond messages in the trigger file.
    Show,
    /// Set an auto-respond message.
    Set {
        /// The message to respond to
        trigger: String,
        /// The message to reply with
        response: String,
    },
    /// Remove an auto-respond message.
    Remove {
        /// The message to remove
        trigger: String,
    },
}

/// Load BotConfig from environment. `token` overrides BOT_TOKEN, `triggers_path` overrides TRIGGERS_PATH.
pub fn load_config(token: Option<String>, triggers_path: Option<String>) -> Result<BotConfig> {
    let mut config = BotConfig::load(token)?;
    if let Some(path) = triggers_path {
        config.triggers_path = path;
    }
    Ok(config)
}
