use crate::services::screening::ScreeningService;
use crate::utils::logging::log_invalid_event;
use std::sync::Arc;
use super::HandlerResult;
use teloxide::prelude::*;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    screening: Arc<ScreeningService>,
) -> HandlerResult {
    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id)
            .text("Invalid callback data format")
            .await?;
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {} ({})",
        data, username, user_id
    );

    bot.answer_callback_query(q.id.clone())
        .text("Processing...")
        .await?;

    if let Err(e) = screening.answer(q.from.id.into(), &data).await {
        log_invalid_event("callback", &data, &e.to_string());
        if let Some(msg) = q.message {
            bot.send_message(msg.chat.id, "❌ Please answer using the Yes or No buttons.")
                .await?;
        }
    }

    Ok(())
}
