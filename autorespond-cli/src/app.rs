//! Wiring: trigger store → AutoResponder → handler chain → Telegram REPL.

use std::sync::Arc;

use anyhow::{Context, Result};
use autorespond::{AutoResponder, AutorespondCommand, CommandHandler, LoggingHandler, Reply, TriggerHandler};
use autorespond_core::init_tracing;
use autorespond_telegram::run_repl;
use handler_chain::HandlerChain;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Logging → commands → triggers. Commands are answered before their text could match a trigger.
pub fn build_handler_chain(responder: Arc<AutoResponder>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(responder.clone())))
        .add_handler(Arc::new(TriggerHandler::new(responder)))
}

fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.require_bot_token()?);
    Ok(match config.telegram_api_url()? {
        Some(url) => bot.set_api_url(url),
        None => bot,
    })
}

/// Main entry: validate config, init logging, open the trigger store, build the chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(triggers_path = %config.triggers_path, "Initializing bot");

    let bot = build_teloxide_bot(&config)?;
    let responder = AutoResponder::open(&config.triggers_path)
        .await
        .with_context(|| format!("Failed to open trigger file {}", config.triggers_path))?;
    let handler_chain = build_handler_chain(Arc::new(responder));

    info!("Bot started successfully");

    run_repl(bot, handler_chain).await
}

/// Runs one command against the trigger file without connecting to Telegram.
pub async fn run_offline(config: &BotConfig, command: AutorespondCommand) -> Result<Reply> {
    let responder = AutoResponder::open(&config.triggers_path)
        .await
        .with_context(|| format!("Failed to open trigger file {}", config.triggers_path))?;
    let reply = responder
        .execute(command)
        .await
        .context("Failed to update auto-respond messages")?;
    Ok(reply)
}
