use crate::conversation::UserId;

/// Errors surfaced by the screening bot.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Failed to deliver message to user {user}: {reason}")]
    Delivery { user: UserId, reason: String },

    #[error("Transport conflict: {0}")]
    TransportConflict(String),

    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

impl BotError {
    pub fn delivery(user: UserId, reason: impl std::fmt::Display) -> Self {
        BotError::Delivery {
            user,
            reason: reason.to_string(),
        }
    }
}

impl From<tokio_cron_scheduler::JobSchedulerError> for BotError {
    fn from(err: tokio_cron_scheduler::JobSchedulerError) -> Self {
        BotError::Scheduler(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
