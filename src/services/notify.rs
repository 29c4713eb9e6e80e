//! Desktop notification delivery

use tokio::process::Command;
use tracing::info;

/// Deliver a timer event as a desktop notification via notify-send
pub async fn send_desktop_notification(message: &str) -> Result<(), String> {
    let output = Command::new("notify-send")
        .args(&["Timeroo", message])
        .output()
        .await
        .map_err(|e| format!("Failed to execute notify-send: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("notify-send failed: {}", stderr));
    }

    Ok(())
}

/// Check if notify-send is available on the system.
///
/// Absence is not fatal; the caller downgrades to log-only delivery.
pub async fn check_notify_available() -> Result<(), String> {
    Command::new("notify-send")
        .arg("--version")
        .output()
        .await
        .map_err(|_| "notify-send is not available, timer events will be logged only".to_string())?;

    info!("notify-send is available");
    Ok(())
}
