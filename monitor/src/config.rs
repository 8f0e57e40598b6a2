//! Runtime configuration loaded from `.env` and environment variables.
//!
//! `AppConfig` is read once at startup and handed to the router through
//! [`crate::state::AppState`]. Every field has a default, and malformed numbers
//! fall back to it rather than aborting startup.

use std::env;
use std::time::Duration;

pub const DEFAULT_APP_NAME: &str = "Process Monitor API";
pub const DEFAULT_PROCESS_LIMIT: usize = 50;
/// Bounds accepted for the `limit` query parameter of the process listing.
pub const MIN_PROCESS_LIMIT: usize = 1;
pub const MAX_PROCESS_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub app_version: String,
    pub app_description: String,
    pub environment: String,
    pub container_color: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub process_limit: usize,
    pub cpu_sample_interval: Duration,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub log_to_stdout: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let process_limit = lookup("PROCESS_LIMIT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| (MIN_PROCESS_LIMIT..=MAX_PROCESS_LIMIT).contains(n))
            .unwrap_or(DEFAULT_PROCESS_LIMIT);

        let cpu_sample_ms = lookup("CPU_SAMPLE_INTERVAL_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(100);

        Self {
            app_name: string("APP_NAME", DEFAULT_APP_NAME),
            app_version: string("APP_VERSION", env!("CARGO_PKG_VERSION")),
            app_description: string(
                "APP_DESCRIPTION",
                "Process monitoring with zero-downtime deployment support",
            ),
            environment: string("ENVIRONMENT", "production"),
            container_color: string("CONTAINER_COLOR", "unknown"),
            host: string("HOST", "0.0.0.0"),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8000),
            cors_origins: string("CORS_ORIGINS", "*")
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            process_limit,
            cpu_sample_interval: Duration::from_millis(cpu_sample_ms),
            log_level: string("LOG_LEVEL", "api=info,monitor=info"),
            log_dir: string("LOG_DIR", "logs"),
            log_file: string("LOG_FILE", "api.log"),
            log_to_stdout: string("LOG_TO_STDOUT", "true").eq_ignore_ascii_case("true"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
