use crate::bot::commands::Command;
use crate::services::screening::ScreeningService;
use std::sync::Arc;
use super::HandlerResult;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    screening: Arc<ScreeningService>,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => match msg.from() {
            Some(user) => {
                screening.start(user.id.into()).await;
            }
            None => {
                crate::utils::logging::log_invalid_event(
                    "start",
                    &msg.chat.id.0.to_string(),
                    "message has no sender",
                );
            }
        },
    }
    Ok(())
}
