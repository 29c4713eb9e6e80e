//! HTTP endpoint handlers
//!
//! Each command endpoint maps 1:1 to a timer operation; the automation
//! surface and any UI shell drive the same state machine.

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, DisplayUpdate, TimerState};
use super::responses::{AdjustRequest, ApiResponse, HealthResponse, StatusResponse};

/// Fetch a timer snapshot for a response, mapping lock failures to 500
fn timer_snapshot(state: &AppState) -> Result<TimerState, StatusCode> {
    state.get_timer_state().map_err(|e| {
        error!("Failed to get timer state: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle POST /toggle - Pause the timer if running, otherwise start it
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle() {
        Ok(running) => {
            let timer = timer_snapshot(&state)?;
            info!("Toggle endpoint called - timer now {}", if running { "running" } else { "paused" });
            let message = if running { "Timer started" } else { "Timer paused" };
            Ok(Json(ApiResponse::from_timer(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to toggle timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start or resume the timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start() {
        Ok(started) => {
            let timer = timer_snapshot(&state)?;
            info!("Start endpoint called - transition={}", started);
            let message = if started { "Timer started" } else { "Timer already running" };
            Ok(Json(ApiResponse::from_timer(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to start timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /pause - Pause the timer
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.pause() {
        Ok(paused) => {
            let timer = timer_snapshot(&state)?;
            info!("Pause endpoint called - transition={}", paused);
            let message = if paused { "Timer paused" } else { "Timer not running" };
            Ok(Json(ApiResponse::from_timer(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to pause timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /clear - Reset the timer to idle
pub async fn clear_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.clear() {
        Ok(()) => {
            let timer = timer_snapshot(&state)?;
            info!("Clear endpoint called - timer reset");
            Ok(Json(ApiResponse::from_timer("Timer cleared".to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to clear timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /adjust - Set the elapsed time from a `[h:]mm:ss` string.
///
/// Unparseable input leaves the timer untouched; the response always
/// carries the current display string either way.
pub async fn adjust_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AdjustRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.set_time(&request.new_time) {
        Ok(display_text) => {
            let timer = timer_snapshot(&state)?;
            info!("Adjust endpoint called - timer at {}", display_text);
            Ok(Json(ApiResponse::from_timer(
                format!("Timer at {}", display_text),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to adjust timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = timer_snapshot(&state)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        display: DisplayUpdate::from(&timer),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
