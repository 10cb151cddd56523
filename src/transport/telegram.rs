use super::Transport;
use crate::conversation::UserId;
use crate::error::{BotError, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Delivers messages through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

pub fn inline_keyboard(labels: &[&str]) -> InlineKeyboardMarkup {
    let row = labels
        .iter()
        .map(|label| InlineKeyboardButton::callback(label.to_string(), label.to_lowercase()))
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(vec![row])
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(
        &self,
        user: UserId,
        text: &str,
        keyboard: Option<&[&str]>,
    ) -> Result<()> {
        // Private chats share the user's id.
        let chat_id = ChatId(user.0 as i64);
        let request = self.bot.send_message(chat_id, text);
        let sent = match keyboard {
            Some(labels) => request.reply_markup(inline_keyboard(labels)).await,
            None => request.await,
        };

        sent.map(|_| ()).map_err(|e| BotError::delivery(user, e))
    }
}
