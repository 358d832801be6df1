//! REPL runner: converts teloxide messages to core::Message, runs the HandlerChain and sends any reply.

use std::sync::Arc;

use anyhow::{Context, Result};
use autorespond_core::{Bot as CoreBot, HandlerResponse, Message, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::bot_adapter::TelegramBotAdapter;

/// Runs the chain for one message and sends a `Reply` back to the message's chat.
///
/// Returns the chain's final response. A failed send is logged and does not turn into an error.
#[instrument(skip_all, fields(user_id = message.user.id, chat_id = message.chat.id, message_id = %message.id))]
pub async fn process_message(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &Message,
) -> autorespond_core::Result<HandlerResponse> {
    let response = chain.handle(message).await?;

    if let HandlerResponse::Reply(text) = &response {
        match bot.reply_to(message, text).await {
            Ok(()) => info!(reply_len = text.len(), "step: reply sent"),
            Err(e) => error!(error = %e, "Failed to send reply"),
        }
    }

    Ok(response)
}

/// Starts the REPL with the given teloxide Bot and HandlerChain.
///
/// Calls get_me() first so messages written by the bot itself can be recognized. Each text
/// message is processed to completion inside the REPL callback; non-text updates are skipped.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let me = bot
        .get_me()
        .await
        .context("Failed to fetch bot identity (getMe); check BOT_TOKEN and TELEGRAM_API_URL")?;
    let self_id = me.user.id;
    info!(
        bot_id = self_id.0,
        username = %me.user.username.as_deref().unwrap_or("unknown"),
        "Bot identity resolved"
    );

    let outbound = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = handler_chain;

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let outbound = outbound.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return Ok(());
            }

            let core_msg = TelegramMessageWrapper::new(&msg, Some(self_id)).to_core();
            if let Err(e) = process_message(&chain, outbound.as_ref(), &core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
