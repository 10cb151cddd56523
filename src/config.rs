use crate::error::{BotError, Result};
use std::env;
use std::time::Duration;

/// Link sent to applicants who pass the screening.
pub const DEFAULT_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSdxTqaq4dCHuIdnV1e3m9oBLlaPWiZV1Qx-Q_0yrmuYmFtK5A/viewform?usp=sharing";

/// Follow-up reminder delay: 24 hours.
pub const DEFAULT_REMINDER_DELAY_SECS: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub form_url: String,
    pub reminder_delay: Duration,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
            .map_err(|_| BotError::Configuration("BOT_TOKEN must be set".to_string()))?;

        if token.trim().is_empty() {
            return Err(BotError::Configuration("BOT_TOKEN must be set".to_string()));
        }

        let form_url = env::var("APPLICATION_FORM_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FORM_URL.to_string());

        let delay_str = env::var("REMINDER_DELAY_SECS")
            .unwrap_or_else(|_| DEFAULT_REMINDER_DELAY_SECS.to_string());
        let delay_secs: u64 = delay_str
            .trim()
            .parse()
            .map_err(|_| BotError::Configuration("Invalid REMINDER_DELAY_SECS".to_string()))?;
        if delay_secs == 0 {
            return Err(BotError::Configuration(
                "REMINDER_DELAY_SECS must be greater than zero".to_string(),
            ));
        }

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| BotError::Configuration("Invalid HTTP_PORT".to_string()))?;

        Ok(Config {
            bot_token: token,
            form_url,
            reminder_delay: Duration::from_secs(delay_secs),
            http_port,
        })
    }
}
