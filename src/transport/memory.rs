use super::Transport;
use crate::conversation::UserId;
use crate::error::{BotError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub user: UserId,
    pub text: String,
    pub keyboard: Option<Vec<String>>,
}

/// In-memory transport that records every delivery.
///
/// Can be switched into a failing mode to exercise delivery errors.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SentMessage>>,
    failing: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every send fails.
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages_for(&self, user: UserId) -> Vec<SentMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.user == user)
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(
        &self,
        user: UserId,
        text: &str,
        keyboard: Option<&[&str]>,
    ) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(BotError::delivery(user, "transport unavailable"));
        }

        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentMessage {
                user,
                text: text.to_string(),
                keyboard: keyboard.map(|k| k.iter().map(|s| s.to_string()).collect()),
            });
        Ok(())
    }
}
