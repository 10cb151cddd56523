use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::conversation::ConversationEngine;
use crate::services::reminder::ReminderScheduler;
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub scheduler: SchedulerHealth,
    pub active_conversations: usize,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SchedulerHealth {
    pub status: String,
    pub pending_reminders: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConversationEngine>,
    pub reminders: ReminderScheduler,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(engine: Arc<ConversationEngine>, reminders: ReminderScheduler) -> Self {
        let state = AppState {
            engine,
            reminders,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    let running = state.reminders.is_running();
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let health_response = HealthResponse {
        status: if running { "healthy".to_string() } else { "unhealthy".to_string() },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        scheduler: SchedulerHealth {
            status: if running { "running".to_string() } else { "stopped".to_string() },
            pending_reminders: state.reminders.pending_count().await,
        },
        active_conversations: state.engine.active_count(),
        uptime_seconds: uptime,
    };

    if running {
        Ok(Json(health_response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    // Ready once the reminder timer loop is running
    if state.reminders.is_running() {
        Ok(Json("ready"))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}
