//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "timeroo")]
#[command(about = "A state-managed HTTP stopwatch daemon for status-bar shells")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20353")]
    pub port: u16,

    /// Host address to bind to (the API is a local automation surface)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Log timer events instead of delivering desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
