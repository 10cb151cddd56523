use crate::error::BotError;
use futures::future::BoxFuture;
use std::sync::Arc;
use teloxide::error_handlers::ErrorHandler;
use teloxide::{ApiError, RequestError};

/// Maps update-listener failures onto the bot's error taxonomy.
pub fn classify(error: &RequestError) -> Option<BotError> {
    match error {
        RequestError::Api(ApiError::TerminatedByOtherGetUpdates) => Some(BotError::TransportConflict(
            "another instance is polling with the same token".to_string(),
        )),
        _ => None,
    }
}

/// Logs polling errors and keeps the dispatcher running.
pub struct ListenerErrorHandler;

impl ErrorHandler<RequestError> for ListenerErrorHandler {
    fn handle_error(self: Arc<Self>, error: RequestError) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            tracing::error!("Error occurred: {}", error);
            if let Some(conflict) = classify(&error) {
                tracing::error!("{}. Make sure no other instances are running!", conflict);
            }
        })
    }
}
