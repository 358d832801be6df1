//! Handler for `/autorespond` commands.

use std::sync::Arc;

use async_trait::async_trait;
use autorespond_core::{Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument, warn};

use crate::command::{AutorespondCommand, USAGE};
use crate::reply::{Reply, Tone};
use crate::responder::AutoResponder;

/// Answers `/autorespond` commands with a rendered [`Reply`]; other messages pass through.
///
/// Failures never escape to the chain: a malformed command gets a usage reply and a storage
/// failure gets an error reply (the cause is logged).
#[derive(Clone)]
pub struct CommandHandler {
    responder: Arc<AutoResponder>,
}

impl CommandHandler {
    pub fn new(responder: Arc<AutoResponder>) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.author_is_self {
            return Ok(HandlerResponse::Continue);
        }

        let command = match AutorespondCommand::parse(&message.content) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(HandlerResponse::Continue),
            Err(e) => {
                warn!(error = %e, content = %message.content, "Malformed autorespond command");
                let reply = Reply::new(Tone::Error, "Error")
                    .with_description(format!("{}.\n{}", e, USAGE));
                return Ok(HandlerResponse::Reply(reply.render()));
            }
        };

        info!(subcommand = command.name(), "step: executing autorespond command");
        let reply = match self.responder.execute(command).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Autorespond command failed");
                Reply::new(Tone::Error, "Error")
                    .with_description("Failed to update auto-respond messages.")
            }
        };

        Ok(HandlerResponse::Reply(reply.render()))
    }
}
