//! Boundary between the screening core and the chat platform.
//!
//! The core only ever talks to a [`Transport`]; authentication, polling and
//! update deduplication belong to the implementation behind it.

pub mod memory;
pub mod telegram;

pub use memory::{RecordingTransport, SentMessage};
pub use telegram::TelegramTransport;

use crate::conversation::UserId;
use crate::error::Result;
use async_trait::async_trait;

/// Button labels offered with every question.
pub const YES_NO_KEYBOARD: [&str; 2] = ["Yes", "No"];

/// Outbound side of the chat platform.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `text` to the user, optionally with a row of reply buttons.
    ///
    /// Each button's callback data is its lowercased label.
    async fn send_message(&self, user: UserId, text: &str, keyboard: Option<&[&str]>)
        -> Result<()>;
}
