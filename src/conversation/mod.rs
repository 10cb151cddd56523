pub mod engine;
pub mod questions;

pub use engine::*;
pub use questions::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the end-user a conversation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<teloxide::types::UserId> for UserId {
    fn from(id: teloxide::types::UserId) -> Self {
        UserId(id.0)
    }
}
