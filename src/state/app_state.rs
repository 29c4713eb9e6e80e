//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::{DisplayUpdate, TimerState};

/// The single shared application state: the timer plus its collaborator
/// channels.
///
/// One instance exists per process, created at startup and handed to both
/// the HTTP layer and the background tasks. Every timer mutation goes
/// through the mutex here; the display watch channel carries what a
/// status-bar shell should render, the notification broadcast channel
/// carries semantic events, and the running watch channel drives the ticker
/// task.
#[derive(Debug)]
pub struct AppState {
    /// The stopwatch itself, guarded by a coarse lock
    pub timer: Arc<Mutex<TimerState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for semantic timer events ("Starting", "Pausing at ...")
    pub notification_tx: broadcast::Sender<String>,
    /// Channel for display updates
    pub display_tx: watch::Sender<DisplayUpdate>,
    /// Channel for the running flag consumed by the ticker task
    pub running_tx: watch::Sender<bool>,
    /// Keep the receivers alive to prevent channel closure
    pub _display_rx: watch::Receiver<DisplayUpdate>,
    pub _running_rx: watch::Receiver<bool>,
}

impl AppState {
    /// Create a new AppState with an idle timer
    pub fn new(port: u16, host: String) -> Self {
        let (notification_tx, _) = broadcast::channel(100);
        let (display_tx, display_rx) = watch::channel(DisplayUpdate::idle());
        let (running_tx, running_rx) = watch::channel(false);

        Self {
            timer: Arc::new(Mutex::new(TimerState::new())),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            notification_tx,
            display_tx,
            running_tx,
            _display_rx: display_rx,
            _running_rx: running_rx,
        }
    }

    /// Apply a mutation to the timer, record the action, and publish the
    /// resulting display and running state
    fn with_timer<F, R>(&self, action: &str, updater: F) -> Result<R, String>
    where
        F: FnOnce(&mut TimerState) -> R,
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let result = updater(&mut timer);
        let snapshot = timer.clone();
        drop(timer); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.publish(&snapshot);
        Ok(result)
    }

    /// Push the current display state and running flag to listeners.
    ///
    /// The running flag is re-published only on a real transition so a
    /// redundant start never disturbs the live tick interval.
    fn publish(&self, snapshot: &TimerState) {
        if let Err(e) = self.display_tx.send(DisplayUpdate::from(snapshot)) {
            warn!("Failed to send display update: {}", e);
        }

        let running = snapshot.running;
        self.running_tx.send_if_modified(|current| {
            if *current != running {
                *current = running;
                true
            } else {
                false
            }
        });
    }

    /// Emit a semantic event to the notification sink, fire-and-forget
    fn notify(&self, message: String) {
        info!("Timer event: {}", message);
        if let Err(e) = self.notification_tx.send(message) {
            warn!("Failed to send notification event: {}", e);
        }
    }

    /// Start or resume the timer.
    ///
    /// Returns true iff a transition to running occurred. Emits "Starting"
    /// when the timer was at zero, "Resuming at H:MM:SS" otherwise; a
    /// redundant start emits nothing.
    pub fn start(&self) -> Result<bool, String> {
        let (started, message) = self.with_timer("start", |timer| {
            let was_zero = timer.elapsed_seconds == 0;
            let started = timer.start();
            let message = if !started {
                None
            } else if was_zero {
                Some("Starting".to_string())
            } else {
                Some(format!("Resuming at {}", timer.display()))
            };
            (started, message)
        })?;

        if let Some(message) = message {
            self.notify(message);
        }
        Ok(started)
    }

    /// Pause the timer.
    ///
    /// Returns true iff a running-to-paused transition occurred. Emits
    /// "Pausing at H:MM:SS" on a real transition only.
    pub fn pause(&self) -> Result<bool, String> {
        let (paused, message) = self.with_timer("pause", |timer| {
            let paused = timer.pause();
            let message = paused.then(|| format!("Pausing at {}", timer.display()));
            (paused, message)
        })?;

        if let Some(message) = message {
            self.notify(message);
        }
        Ok(paused)
    }

    /// Pause if running, otherwise start. Returns the resulting running
    /// flag and emits the event of whichever operation ran.
    pub fn toggle(&self) -> Result<bool, String> {
        let (running, message) = self.with_timer("toggle", |timer| {
            if timer.running {
                timer.pause();
                (false, format!("Pausing at {}", timer.display()))
            } else {
                let was_zero = timer.elapsed_seconds == 0;
                timer.start();
                let message = if was_zero {
                    "Starting".to_string()
                } else {
                    format!("Resuming at {}", timer.display())
                };
                (true, message)
            }
        })?;

        self.notify(message);
        Ok(running)
    }

    /// Reset the timer to idle. Idempotent, no event emitted.
    pub fn clear(&self) -> Result<(), String> {
        info!("Clearing timer");
        self.with_timer("clear", |timer| timer.clear())
    }

    /// Set the elapsed time from a `[h:]mm:ss` string.
    ///
    /// Unparseable input is silently ignored; either way the current
    /// display string is returned.
    pub fn set_time(&self, input: &str) -> Result<String, String> {
        self.with_timer("adjust", |timer| timer.set_from_string(input))
    }

    /// Advance the timer by one second.
    ///
    /// Called by the ticker task while running; a straggling call while
    /// paused changes nothing. Not recorded as a user action.
    pub fn tick(&self) -> Result<(), String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        if !timer.running {
            return Ok(());
        }
        timer.tick();
        let snapshot = timer.clone();
        drop(timer);

        self.publish(&snapshot);
        Ok(())
    }

    /// Get a snapshot of the current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer.lock()
            .map(|timer| timer.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Subscribe to display updates (the display sink contract)
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayUpdate> {
        self.display_tx.subscribe()
    }

    /// Subscribe to semantic timer events (the notification sink contract)
    pub fn subscribe_notifications(&self) -> broadcast::Receiver<String> {
        self.notification_tx.subscribe()
    }

    /// Subscribe to the running flag (consumed by the ticker task)
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.running_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(0, "127.0.0.1".to_string())
    }

    #[test]
    fn start_emits_starting_then_pause_and_resume_events() {
        let state = state();
        let mut events = state.subscribe_notifications();

        assert_eq!(state.start(), Ok(true));
        assert_eq!(events.try_recv().unwrap(), "Starting");

        state.tick().unwrap();
        assert_eq!(state.pause(), Ok(true));
        assert_eq!(events.try_recv().unwrap(), "Pausing at 0:00:01");

        assert_eq!(state.start(), Ok(true));
        assert_eq!(events.try_recv().unwrap(), "Resuming at 0:00:01");
    }

    #[test]
    fn redundant_start_and_pause_emit_nothing() {
        let state = state();
        let mut events = state.subscribe_notifications();

        state.start().unwrap();
        events.try_recv().unwrap();

        assert_eq!(state.start(), Ok(false));
        assert!(events.try_recv().is_err());

        state.pause().unwrap();
        events.try_recv().unwrap();

        assert_eq!(state.pause(), Ok(false));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn toggle_twice_lands_in_paused_with_elapsed_time() {
        let state = state();

        assert_eq!(state.toggle(), Ok(true));
        state.tick().unwrap();
        assert_eq!(state.toggle(), Ok(false));

        let timer = state.get_timer_state().unwrap();
        assert_eq!(timer.elapsed_seconds, 1);
        assert!(!timer.running);
        assert!(!timer.is_idle());
    }

    #[test]
    fn display_channel_tracks_state_changes() {
        let state = state();
        let display = state.subscribe_display();

        assert!(display.borrow().iconic);

        state.start().unwrap();
        state.tick().unwrap();
        {
            let update = display.borrow();
            assert_eq!(update.text, "0:00:01");
            assert!(!update.dimmed);
        }

        state.pause().unwrap();
        assert!(display.borrow().dimmed);

        state.clear().unwrap();
        assert!(display.borrow().iconic);
    }

    #[test]
    fn running_flag_publishes_only_on_transitions() {
        let state = state();
        let mut running = state.subscribe_running();

        state.start().unwrap();
        assert!(running.has_changed().unwrap());
        assert!(*running.borrow_and_update());

        // Redundant start must not wake the ticker again
        state.start().unwrap();
        assert!(!running.has_changed().unwrap());

        state.pause().unwrap();
        assert!(running.has_changed().unwrap());
        assert!(!*running.borrow_and_update());
    }

    #[test]
    fn set_time_ignores_garbage_and_reports_current_display() {
        let state = state();
        state.start().unwrap();
        for _ in 0..10 {
            state.tick().unwrap();
        }

        assert_eq!(state.set_time("not a time"), Ok("0:00:10".to_string()));
        let timer = state.get_timer_state().unwrap();
        assert_eq!(timer.elapsed_seconds, 10);
        assert!(timer.running);

        assert_eq!(state.set_time("0:01:30"), Ok("0:01:30".to_string()));
        assert_eq!(state.get_timer_state().unwrap().elapsed_seconds, 90);
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let state = state();
        state.start().unwrap();
        state.tick().unwrap();
        state.pause().unwrap();

        state.tick().unwrap();
        assert_eq!(state.get_timer_state().unwrap().elapsed_seconds, 1);
    }

    #[test]
    fn clear_is_idempotent_and_records_the_action() {
        let state = state();
        state.start().unwrap();
        state.tick().unwrap();

        state.clear().unwrap();
        state.clear().unwrap();
        assert!(state.get_timer_state().unwrap().is_idle());

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("clear"));
        assert!(time.is_some());
    }
}
