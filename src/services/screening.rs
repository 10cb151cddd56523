use crate::conversation::{reminder_message, ConversationEngine, Output, UserId};
use crate::error::Result;
use crate::services::reminder::ReminderScheduler;
use crate::transport::{Transport, YES_NO_KEYBOARD};
use crate::utils::logging::log_delivery_error;
use crate::utils::validation::parse_answer;
use std::sync::Arc;
use std::time::Duration;

/// Routes inbound screening events through the engine and delivers the
/// resulting replies.
pub struct ScreeningService {
    engine: Arc<ConversationEngine>,
    reminders: ReminderScheduler,
    transport: Arc<dyn Transport>,
    reminder_delay: Duration,
}

impl ScreeningService {
    pub fn new(
        engine: Arc<ConversationEngine>,
        reminders: ReminderScheduler,
        transport: Arc<dyn Transport>,
        reminder_delay: Duration,
    ) -> Self {
        Self {
            engine,
            reminders,
            transport,
            reminder_delay,
        }
    }

    pub fn engine(&self) -> &Arc<ConversationEngine> {
        &self.engine
    }

    pub fn reminders(&self) -> &ReminderScheduler {
        &self.reminders
    }

    pub async fn start(&self, user: UserId) -> Output {
        let output = self.engine.on_start(user);
        self.deliver(user, &output).await;
        output
    }

    /// Handles raw answer data. Malformed data is returned as an error and
    /// leaves the conversation untouched.
    pub async fn answer(&self, user: UserId, data: &str) -> Result<Output> {
        let answer = parse_answer(data)?;
        let output = self.engine.on_answer(user, answer);
        self.deliver(user, &output).await;

        if output.is_accepted() {
            let message = reminder_message(self.engine.form_url());
            if let Err(e) = self
                .reminders
                .schedule(user, self.reminder_delay, message)
                .await
            {
                tracing::error!("Failed to schedule reminder for user {}: {}", user, e);
            }
        }

        Ok(output)
    }

    async fn deliver(&self, user: UserId, output: &Output) {
        let keyboard = output.expects_answer().then_some(&YES_NO_KEYBOARD[..]);
        if let Err(e) = self
            .transport
            .send_message(user, &output.text(), keyboard)
            .await
        {
            log_delivery_error("reply", user, &e.to_string());
        }
    }
}
