//! Timeroo - A state-managed HTTP stopwatch daemon
//!
//! This library provides a single process-wide stopwatch (idle, running,
//! paused; whole-second accumulation) together with the `[h:]mm:ss` time
//! codec, and exposes every timer operation over a local HTTP API so
//! status-bar shells and scripts can drive the same state machine.

pub mod api;
pub mod codec;
pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
