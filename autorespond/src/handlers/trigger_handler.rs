//! Handler that answers messages matching a stored trigger.

use std::sync::Arc;

use async_trait::async_trait;
use autorespond_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::responder::AutoResponder;

/// Replies with the stored response when the message text is a trigger; otherwise continues.
#[derive(Clone)]
pub struct TriggerHandler {
    responder: Arc<AutoResponder>,
}

impl TriggerHandler {
    pub fn new(responder: Arc<AutoResponder>) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl Handler for TriggerHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match self
            .responder
            .handle_message(message.author_is_self, &message.content)
            .await
        {
            // An empty response has nothing to send.
            Some(response) if !response.is_empty() => {
                info!(reply_len = response.len(), "step: trigger matched");
                Ok(HandlerResponse::Reply(response))
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
