//! # Screening Bot Main Entry Point
//!
//! Initializes logging, loads configuration and runs the application
//! until it is interrupted.

use anyhow::Result;
use screening_bot::app::Application;
use screening_bot::config::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screening_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Screening Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, reminder delay: {}s",
        config.http_port,
        config.reminder_delay.as_secs()
    );

    let app = Application::build(config).await?;
    app.run().await
}
