use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is defaulted; the prototype runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Milliseconds between simulated processing steps.
    pub step_interval_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            step_interval_ms: std::env::var("STUDIO_STEP_INTERVAL_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse::<u64>()
                .context("STUDIO_STEP_INTERVAL_MS must be a whole number of milliseconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}
