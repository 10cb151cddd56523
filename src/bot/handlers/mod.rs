pub mod callback;
pub mod error;
pub mod general_message;
pub mod message;

use crate::services::screening::ScreeningService;
use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub struct BotHandler {
    pub screening: Arc<ScreeningService>,
}

impl BotHandler {
    pub fn new(screening: Arc<ScreeningService>) -> Self {
        Self { screening }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::{HandlerExt, UpdateFilterExt};

        let screening = self.screening.clone();
        let screening_callback = self.screening.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let screening = screening.clone();
                        async move { message::command_handler(bot, msg, cmd, screening).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let screening = screening_callback.clone();
                async move { callback::callback_handler(bot, q, screening).await }
            }))
            .branch(Update::filter_message().endpoint(general_message::handle_general_message))
    }
}
