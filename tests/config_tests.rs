use screening_bot::config::{Config, DEFAULT_FORM_URL};
use screening_bot::error::BotError;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "BOT_TOKEN",
        "TELEGRAM_BOT_TOKEN",
        "APPLICATION_FORM_URL",
        "REMINDER_DELAY_SECS",
        "HTTP_PORT",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("BOT_TOKEN", "test_token_123");
    env::set_var("APPLICATION_FORM_URL", "https://example.com/apply");
    env::set_var("REMINDER_DELAY_SECS", "60");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.bot_token, "test_token_123");
    assert_eq!(config.form_url, "https://example.com/apply");
    assert_eq!(config.reminder_delay, Duration::from_secs(60));
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.bot_token, "required_token");
    assert_eq!(config.form_url, DEFAULT_FORM_URL);
    assert_eq!(config.reminder_delay, Duration::from_secs(86_400));
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();

    assert!(matches!(result, Err(BotError::Configuration(_))));
    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("BOT_TOKEN must be set"));
}

#[test]
fn test_config_accepts_legacy_token_name() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "legacy_token");

    let config = Config::from_env().unwrap();
    assert_eq!(config.bot_token, "legacy_token");

    clear_env();
}

#[test]
fn test_config_blank_token_is_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_invalid_reminder_delay() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("REMINDER_DELAY_SECS", "tomorrow");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid REMINDER_DELAY_SECS"));

    env::set_var("REMINDER_DELAY_SECS", "0");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "  65535  ");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    clear_env();
}

#[test]
fn test_config_empty_form_url_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("BOT_TOKEN", "valid_token");
    env::set_var("APPLICATION_FORM_URL", "");

    let config = Config::from_env().unwrap();
    assert_eq!(config.form_url, DEFAULT_FORM_URL);

    clear_env();
}
