//! Application lifecycle: wires the bot, engine, scheduler and health
//! server together and tears them down in order.

use crate::bot::handlers::{error::ListenerErrorHandler, BotHandler};
use crate::config::Config;
use crate::conversation::{ConversationEngine, QuestionBank};
use crate::error::Result;
use crate::services::health::HealthService;
use crate::services::reminder::ReminderScheduler;
use crate::services::screening::ScreeningService;
use crate::transport::{TelegramTransport, Transport};
use crate::utils::logging::log_system_event;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners;
use tracing::info;

/// Owns everything that lives for the duration of the process.
pub struct Application {
    config: Config,
    bot: Bot,
    screening: Arc<ScreeningService>,
    health: HealthService,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self> {
        let bot = Bot::new(&config.bot_token);
        let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::new(bot.clone()));

        let engine = Arc::new(ConversationEngine::new(
            QuestionBank::standard(),
            config.form_url.clone(),
        ));
        let reminders = ReminderScheduler::new(transport.clone()).await?;
        let screening = Arc::new(ScreeningService::new(
            engine.clone(),
            reminders.clone(),
            transport,
            config.reminder_delay,
        ));
        let health = HealthService::new(engine, reminders);

        Ok(Self {
            config,
            bot,
            screening,
            health,
        })
    }

    pub fn screening(&self) -> &Arc<ScreeningService> {
        &self.screening
    }

    /// Runs until the dispatcher stops (Ctrl-C) or the health server fails,
    /// then shuts down.
    pub async fn run(self) -> anyhow::Result<()> {
        self.screening.reminders().start().await?;

        let port = self.config.http_port;
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", port, e))?;
        info!("Health check server starting on port {}", port);

        let bot = self.bot.clone();
        let handler = BotHandler::new(self.screening.clone());
        let bot_task = tokio::spawn(async move {
            let updates = update_listeners::polling_default(bot.clone()).await;
            let mut dispatcher = Dispatcher::builder(bot, handler.schema())
                .error_handler(LoggingErrorHandler::with_custom_text(
                    "An error from the update handler",
                ))
                .enable_ctrlc_handler()
                .build();
            dispatcher
                .dispatch_with_listener(updates, Arc::new(ListenerErrorHandler))
                .await;
        });

        let router = self.health.router.clone();
        let health_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Health server error: {}", e);
            }
        });

        log_system_event("Bot started", None);

        tokio::select! {
            result = bot_task => {
                if let Err(e) = result {
                    tracing::error!("Bot task error: {}", e);
                }
            }
            result = health_task => {
                if let Err(e) = result {
                    tracing::error!("Health task error: {}", e);
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    pub async fn shutdown(&self) {
        if let Err(e) = self.screening.reminders().shutdown().await {
            tracing::warn!("Error stopping reminder scheduler: {}", e);
        }
        log_system_event("Application stopped", None);
    }
}
