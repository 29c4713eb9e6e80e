//! Timeroo - A state-managed HTTP stopwatch daemon
//!
//! This is the main entry point for the timeroo application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use timeroo::{
    api::create_router,
    config::Config,
    services::check_notify_available,
    state::AppState,
    tasks::{notifier_task, ticker_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("timeroo={},tower_http=info", config.log_level()))
        .init();

    info!("Starting timeroo daemon v1.0.0");
    info!("Configuration: host={}, port={}, desktop notifications={}",
          config.host, config.port, !config.no_notify);

    // Probe the notification service; absence downgrades to log-only delivery
    let mut deliver = !config.no_notify;
    if deliver {
        if let Err(e) = check_notify_available().await {
            warn!("{}", e);
            deliver = false;
        }
    }

    // Create the single shared timer instance
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the tick source background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Start the notification delivery background task
    let notifier_state = Arc::clone(&state);
    tokio::spawn(async move {
        notifier_task(notifier_state, deliver).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle - Start or pause the timer");
    info!("  POST /start  - Start or resume the timer");
    info!("  POST /pause  - Pause the timer");
    info!("  POST /clear  - Reset the timer to idle");
    info!("  POST /adjust - Set the elapsed time from [h:]mm:ss");
    info!("  GET  /status - Check current timer and display state");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
