//! Notification delivery background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{services::send_desktop_notification, state::AppState};

/// Background task that drains semantic timer events and delivers them to
/// the desktop.
///
/// Delivery is fire-and-forget: failures are logged and never reach the
/// timer. With `deliver` false (notify-send missing or disabled by flag)
/// events are still drained and logged.
pub async fn notifier_task(state: Arc<AppState>, deliver: bool) {
    info!("Starting notifier task (desktop delivery: {})", deliver);

    let mut events = state.subscribe_notifications();

    loop {
        match events.recv().await {
            Ok(message) => {
                if !deliver {
                    debug!("Desktop delivery disabled, event logged only: {}", message);
                    continue;
                }

                if let Err(e) = send_desktop_notification(&message).await {
                    warn!("Failed to deliver notification: {}", e);
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Notifier lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                debug!("Notification channel closed, stopping notifier task");
                return;
            }
        }
    }
}
