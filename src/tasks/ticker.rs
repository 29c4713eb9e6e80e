//! One-second tick source background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that advances the timer once per second while it runs.
///
/// The timer state owns no clock of its own; this task watches the running
/// flag, keeps a 1-second interval alive while the flag is set, and cancels
/// it the moment a pause or clear drops the flag. The flag is published only
/// on real transitions, so a redundant start never restarts the interval.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut running_rx = state.subscribe_running();

    loop {
        // Idle until the timer starts running
        while !*running_rx.borrow_and_update() {
            if running_rx.changed().await.is_err() {
                debug!("Running channel closed, stopping ticker task");
                return;
            }
        }

        debug!("Timer running, tick source active");
        let mut tick = interval(Duration::from_secs(1));
        // The first interval tick completes immediately; consume it so the
        // first second is counted a full second after start
        tick.tick().await;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to advance timer: {}", e);
                    }
                }

                changed = running_rx.changed() => {
                    match changed {
                        Ok(()) => {
                            if !*running_rx.borrow_and_update() {
                                debug!("Timer paused, tick source cancelled");
                                break;
                            }
                        }
                        Err(_) => {
                            debug!("Running channel closed, stopping ticker task");
                            return;
                        }
                    }
                }
            }
        }
    }
}
