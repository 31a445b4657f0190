//! Layered configuration for the dashboard.
//!
//! Resolution order: built-in defaults, then an optional config file, then
//! `PERFWATCH_*` environment variables. CLI flags override the result in
//! `main`.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::poll::Schedule;

/// Resolved dashboard settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Backend base URL.
    pub server_url: String,
    /// Interval between metrics ticks, milliseconds.
    pub refresh_ms: u64,
    /// Averaging window passed to the backend, milliseconds.
    pub averaging_ms: u64,
    /// Averaging window for the immediate startup tick, milliseconds.
    pub warmup_ms: u64,
    /// HTTP request timeout, seconds.
    pub timeout_secs: u64,
}

impl Settings {
    /// Load settings, optionally merging a config file.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server_url", "http://localhost:5000")?
            .set_default("refresh_ms", 2500u64)?
            .set_default("averaging_ms", 2500u64)?
            .set_default("warmup_ms", 500u64)?
            .set_default("timeout_secs", 10u64)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix("PERFWATCH"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// The poll schedule these settings describe.
    pub fn schedule(&self) -> Schedule {
        Schedule {
            refresh: Duration::from_millis(self.refresh_ms),
            averaging: Duration::from_millis(self.averaging_ms),
            warmup: Duration::from_millis(self.warmup_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.server_url, "http://localhost:5000");
        assert_eq!(settings.refresh_ms, 2500);
        assert_eq!(settings.averaging_ms, 2500);
        assert_eq!(settings.warmup_ms, 500);
        assert_eq!(settings.timeout_secs, 10);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "server_url = \"http://raspberrypi:5000\"\nrefresh_ms = 1000"
        )
        .unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.server_url, "http://raspberrypi:5000");
        assert_eq!(settings.refresh_ms, 1000);
        // Untouched keys keep their defaults
        assert_eq!(settings.warmup_ms, 500);
    }

    #[test]
    fn test_schedule_conversion() {
        let settings = Settings::load(None).unwrap();
        let schedule = settings.schedule();
        assert_eq!(schedule.refresh, Duration::from_millis(2500));
        assert_eq!(schedule.averaging, Duration::from_millis(2500));
        assert_eq!(schedule.warmup, Duration::from_millis(500));
    }
}
