//! # Screening Bot
//!
//! A Telegram bot that screens applicants with two yes/no questions.
//!
//! ## Features
//! - Linear questionnaire with a rejection message for every "no"
//! - Application form link once every answer is "yes"
//! - One follow-up reminder per applicant, 24 hours later
//! - Health endpoints for the hosting platform

/// Application lifecycle
pub mod app;
/// Bot commands and update handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Question bank and conversation state machine
pub mod conversation;
/// Error types
pub mod error;
/// Background services: reminders, screening flow, health checks
pub mod services;
/// Chat platform boundary
pub mod transport;
/// Logging helpers and input validation
pub mod utils;
