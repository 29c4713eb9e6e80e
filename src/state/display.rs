//! Display sink payload

use serde::{Deserialize, Serialize};

use super::TimerState;

/// What a status-bar shell should render for the current timer state.
///
/// An idle timer shows an icon with no text; otherwise the formatted time is
/// shown, dimmed while paused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    /// Formatted elapsed time, empty when the icon should be shown instead
    pub text: String,
    /// True when the shell should show its idle icon rather than text
    pub iconic: bool,
    /// True when the rendering should appear disabled (paused with time on
    /// the clock)
    pub dimmed: bool,
}

impl DisplayUpdate {
    /// The rendering for a freshly started process (idle timer)
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            iconic: true,
            dimmed: false,
        }
    }
}

impl From<&TimerState> for DisplayUpdate {
    fn from(timer: &TimerState) -> Self {
        if timer.is_idle() {
            Self::idle()
        } else {
            Self {
                text: timer.display(),
                iconic: false,
                dimmed: !timer.running,
            }
        }
    }
}

impl Default for DisplayUpdate {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_renders_as_icon() {
        let timer = TimerState::new();
        let update = DisplayUpdate::from(&timer);
        assert!(update.iconic);
        assert!(!update.dimmed);
        assert!(update.text.is_empty());
    }

    #[test]
    fn running_timer_renders_undimmed_text() {
        let mut timer = TimerState::new();
        timer.start();
        timer.tick();
        let update = DisplayUpdate::from(&timer);
        assert_eq!(update.text, "0:00:01");
        assert!(!update.iconic);
        assert!(!update.dimmed);
    }

    #[test]
    fn paused_timer_renders_dimmed_text() {
        let mut timer = TimerState::new();
        timer.start();
        timer.tick();
        timer.pause();
        let update = DisplayUpdate::from(&timer);
        assert_eq!(update.text, "0:00:01");
        assert!(!update.iconic);
        assert!(update.dimmed);
    }

    #[test]
    fn running_at_zero_still_shows_text() {
        let mut timer = TimerState::new();
        timer.start();
        let update = DisplayUpdate::from(&timer);
        assert_eq!(update.text, "0:00:00");
        assert!(!update.iconic);
    }
}
