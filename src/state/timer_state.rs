//! The stopwatch state machine

use serde::{Deserialize, Serialize};

use crate::codec::{format_time, parse_time};

/// Stopwatch state: accumulated whole seconds plus a running flag.
///
/// Three logical states fall out of the two fields: idle (zero elapsed, not
/// running), paused (nonzero elapsed, not running), and running. The struct
/// holds no timer of its own; an external 1 Hz source calls [`tick`] while
/// the timer is running.
///
/// [`tick`]: TimerState::tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    pub elapsed_seconds: u64,
    pub running: bool,
}

impl TimerState {
    /// Create a new idle timer
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Start or resume the timer.
    ///
    /// Returns true iff this call transitioned idle/paused to running; a
    /// start while already running is a no-op.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Pause the timer.
    ///
    /// Returns true iff this call transitioned running to paused.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Pause if running, otherwise start. Returns the resulting running flag.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Advance the timer by one second.
    ///
    /// Called once per second by the external tick source while running;
    /// ignored otherwise so a straggling tick can never advance a paused
    /// timer.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds += 1;
        }
    }

    /// Reset to idle: zero elapsed, not running. Idempotent.
    pub fn clear(&mut self) {
        self.elapsed_seconds = 0;
        self.running = false;
    }

    /// Set the elapsed time from a `[h:]mm:ss` string.
    ///
    /// A valid string replaces the elapsed time and leaves the running flag
    /// untouched; an unparseable string changes nothing. Either way the
    /// current display string is returned.
    pub fn set_from_string(&mut self, input: &str) -> String {
        match parse_time(input) {
            Ok(total) => self.elapsed_seconds = total,
            Err(e) => tracing::debug!("Ignoring unparseable time string: {}", e),
        }
        self.display()
    }

    /// The canonical `H:MM:SS` rendering of the elapsed time
    pub fn display(&self) -> String {
        format_time(self.elapsed_seconds)
    }

    /// True when the timer has never run since the last clear
    pub fn is_idle(&self) -> bool {
        self.elapsed_seconds == 0 && !self.running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_idle() {
        let mut timer = TimerState::new();
        assert!(timer.is_idle());
        assert!(timer.start());
        assert!(timer.running);
        assert!(!timer.start());
    }

    #[test]
    fn accumulates_one_second_per_tick_while_running() {
        let mut timer = TimerState::new();
        timer.start();
        for _ in 0..65 {
            timer.tick();
        }
        assert_eq!(timer.elapsed_seconds, 65);
        assert_eq!(timer.display(), "0:01:05");
    }

    #[test]
    fn tick_is_a_no_op_while_paused() {
        let mut timer = TimerState::new();
        timer.start();
        timer.tick();
        assert!(timer.pause());
        timer.tick();
        assert_eq!(timer.elapsed_seconds, 1);
        assert!(!timer.pause());
    }

    #[test]
    fn toggle_flips_between_running_and_paused() {
        let mut timer = TimerState::new();
        assert!(timer.toggle());
        timer.tick();
        assert!(!timer.toggle());
        assert_eq!(timer.elapsed_seconds, 1);
        assert!(!timer.running);
        assert!(!timer.is_idle());
    }

    #[test]
    fn clear_resets_from_any_state_and_is_idempotent() {
        let mut timer = TimerState::new();
        timer.start();
        timer.tick();
        timer.tick();
        timer.clear();
        assert!(timer.is_idle());
        timer.clear();
        assert!(timer.is_idle());
    }

    #[test]
    fn set_from_string_replaces_elapsed_but_not_running() {
        let mut timer = TimerState::new();
        timer.start();
        assert_eq!(timer.set_from_string("1:30"), "0:01:30");
        assert_eq!(timer.elapsed_seconds, 90);
        assert!(timer.running);
    }

    #[test]
    fn set_from_string_silently_ignores_garbage() {
        let mut timer = TimerState::new();
        timer.start();
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.set_from_string("invalid"), "0:00:10");
        assert_eq!(timer.elapsed_seconds, 10);
        assert!(timer.running);
    }
}
