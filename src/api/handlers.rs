//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Json},
};
use serde::Deserialize;
use tracing::{info, warn};

use super::responses::{HealthResponse, TimerResponse};
use crate::{
    assets,
    error::ApiError,
    state::{now_ms, AppState, TimerRecord},
};

/// Body of POST /api/timer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerRequest {
    #[serde(default)]
    pub duration_ms: Option<i64>,
}

/// Handle GET /api/timer - report the countdown with derived remaining time
pub async fn get_timer_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    match state.store.load().await {
        Some(record) => {
            let snapshot = record.snapshot(now_ms());
            Json(TimerResponse::current(record, snapshot))
        }
        None => Json(TimerResponse::empty()),
    }
}

/// Handle POST /api/timer - start a new countdown, replacing any existing one
pub async fn start_timer_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartTimerRequest>,
) -> Result<Json<TimerResponse>, ApiError> {
    let duration_ms = match request.duration_ms {
        Some(d) if d > 0 => d,
        other => {
            warn!("Rejected timer start with durationMs={:?}", other);
            return Err(ApiError::InvalidDuration);
        }
    };

    let record = TimerRecord::starting_now(duration_ms);
    state.store.save(&record).await?;

    info!("Started {}ms countdown", duration_ms);
    Ok(Json(TimerResponse::started(record)))
}

/// Handle DELETE /api/timer - cancel the countdown
pub async fn clear_timer_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, ApiError> {
    state.store.clear().await?;
    info!("Timer cleared");
    Ok(Json(TimerResponse::empty()))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}

/// Handle GET / - serve the countdown page
pub async fn index_handler() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}
