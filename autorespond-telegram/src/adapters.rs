//! Adapters from Telegram (teloxide) types to autorespond_core types.
//! Depends only on teloxide and autorespond_core type definitions.

use autorespond_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};
use teloxide::types::UserId;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// True when `from` is the bot's own account. Unknown senders or an unknown bot id count as "not self".
pub fn is_self_author(from: Option<&teloxide::types::User>, self_id: Option<UserId>) -> bool {
    match (from, self_id) {
        (Some(user), Some(id)) => user.id == id,
        _ => false,
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. `self_id` is the bot's own user id,
/// used to flag messages the bot wrote itself.
pub struct TelegramMessageWrapper<'a> {
    message: &'a teloxide::types::Message,
    self_id: Option<UserId>,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(message: &'a teloxide::types::Message, self_id: Option<UserId>) -> Self {
        Self { message, self_id }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let from = self.message.from.as_ref();
        Message {
            id: self.message.id.to_string(),
            user: from
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.message.chat.id.0,
                chat_type: format!("{:?}", self.message.chat.kind),
            },
            content: self.message.text().unwrap_or("").to_string(),
            created_at: chrono::Utc::now(),
            author_is_self: is_self_author(from, self.self_id),
        }
    }
}
