//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{DisplayUpdate, TimerState};

/// Request body for the adjust endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustRequest {
    /// The new elapsed time as a `[h:]mm:ss` string
    pub new_time: String,
}

/// API response structure for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    /// Canonical `H:MM:SS` rendering of the elapsed time
    pub display: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            display: timer.display(),
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a response whose status reflects the timer snapshot
    pub fn from_timer(message: String, timer: TimerState) -> Self {
        let status = if timer.running {
            "running"
        } else if timer.is_idle() {
            "idle"
        } else {
            "paused"
        };
        Self::new(status.to_string(), message, timer)
    }
}

/// Status response with display and last-action information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub display: DisplayUpdate,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "1.0.0".to_string(),
        }
    }
}
