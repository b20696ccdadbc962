//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROBE_TIMEOUT_SECONDS` - Optional total timeout per outbound probe.
//!   Unset means probes are awaited for as long as the upstream takes.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout in seconds applied to each outbound probe request.
    /// `None` leaves the probes unbounded; a check then takes as long as the
    /// slowest upstream.
    pub probe_timeout_seconds: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let probe_timeout_seconds = env::var("PROBE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            listen_addr,
            log_level,
            log_format,
            probe_timeout_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `probe_timeout_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.probe_timeout_seconds == Some(0) {
            anyhow::bail!("PROBE_TIMEOUT_SECONDS must be greater than 0 when set");
        }

        Ok(())
    }

    /// Timeout applied to each outbound probe request, if any.
    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_seconds.map(Duration::from_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        match self.probe_timeout_seconds {
            Some(secs) => tracing::info!("  Probe timeout: {}s", secs),
            None => tracing::info!("  Probe timeout: none"),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
