use crate::conversation::UserId;
use tracing::{debug, error, info, warn};

/// Logs conversation progress with consistent format
pub fn log_conversation_event(event: &str, user: UserId, details: Option<&str>) {
    match details {
        Some(d) => info!("{}: user {} - {}", event, user, d),
        None => info!("{}: user {}", event, user),
    }
}

/// Logs a conversation reaching a terminal state
pub fn log_conversation_end(user: UserId, outcome: &str, index: usize) {
    info!(
        "CONV_END: user {} {} at question {}",
        user,
        outcome,
        index + 1
    );
}

/// Logs reminder scheduling and delivery with consistent format
pub fn log_reminder_event(event: &str, user: UserId, details: Option<&str>) {
    match details {
        Some(d) => debug!("REMINDER: {} for user {} - {}", event, user, d),
        None => debug!("REMINDER: {} for user {}", event, user),
    }
}

/// Logs failed message deliveries; these are never retried
pub fn log_delivery_error(context: &str, user: UserId, error: &str) {
    error!("DELIVERY_ERROR: {} to user {} failed - {}", context, user, error);
}

/// Logs rejected inbound events
pub fn log_invalid_event(source: &str, value: &str, error: &str) {
    warn!("INVALID_EVENT: {} '{}' - {}", source, value, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
