//! Application configuration loaded from environment variables.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::info::counter::DEFAULT_COUNTER_START;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Identity shown in the greeting and readiness log.
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Initial value of the `/info` parity counter.
    #[serde(default = "default_counter_start")]
    pub counter_start: i64,

    // === Observability ===
    /// Port for the Prometheus scrape endpoint. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_server_name() -> String {
    "Rust+Axum".to_string()
}

fn default_counter_start() -> i64 {
    DEFAULT_COUNTER_START
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            server_name: default_server_name(),
            counter_start: default_counter_start(),
            metrics_port: None,
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.server_name.trim().is_empty() {
            return Err("SERVER_NAME must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.metrics_port == Some(self.port) {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Log filter built from `RUST_LOG`, or `info` if it does not parse.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.rust_log).unwrap_or_else(|_| EnvFilter::new(default_log_level()))
    }

    /// Greeting body served on `/`.
    pub fn greeting(&self) -> String {
        format!("Hi! {} server", self.server_name)
    }
}
