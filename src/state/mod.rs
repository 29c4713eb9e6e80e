//! State management module
//!
//! This module contains the stopwatch state machine, the display payload,
//! and the shared application state that wires them to the collaborators.

pub mod app_state;
pub mod display;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use display::DisplayUpdate;
pub use timer_state::TimerState;
