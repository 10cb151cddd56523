use super::HandlerResult;
use teloxide::prelude::*;

pub async fn handle_general_message(bot: Bot, msg: Message) -> HandlerResult {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            let command = text.split_whitespace().next().unwrap_or(text);
            bot.send_message(
                msg.chat.id,
                format!("Unknown command: {command}\n\nUse /help to see all available commands."),
            )
            .await?;
        } else {
            bot.send_message(msg.chat.id, "Send /start to begin the screening questions.")
                .await?;
        }
    }

    Ok(())
}
