use crate::error::{BotError, Result};

/// Callback data carried by the "Yes" button.
pub const YES: &str = "yes";
/// Callback data carried by the "No" button.
pub const NO: &str = "no";

/// Parses callback data into an answer. Anything other than yes/no is an
/// invalid event rather than an implicit "no".
pub fn parse_answer(data: &str) -> Result<bool> {
    let data = data.trim();

    if data.is_empty() {
        return Err(BotError::InvalidEvent("Answer cannot be empty".to_string()));
    }

    if data.eq_ignore_ascii_case(YES) {
        Ok(true)
    } else if data.eq_ignore_ascii_case(NO) {
        Ok(false)
    } else {
        Err(BotError::InvalidEvent(format!(
            "Invalid answer '{data}'. Must be one of: yes, no"
        )))
    }
}
