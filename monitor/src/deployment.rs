use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AppConfig;

/// Identity of this running instance, fixed at process start.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentInfo {
    pub container_color: String,
    pub environment: String,
    pub start_time: DateTime<Utc>,
    pub hostname: String,
    pub version: String,
    #[serde(skip)]
    started: Instant,
}

impl DeploymentInfo {
    pub fn new(config: &AppConfig, hostname: impl Into<String>) -> Self {
        Self {
            container_color: config.container_color.clone(),
            environment: config.environment.clone(),
            start_time: Utc::now(),
            hostname: hostname.into(),
            version: config.app_version.clone(),
            started: Instant::now(),
        }
    }

    /// Time since start on the monotonic clock; never goes backwards.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.uptime().as_secs_f64()
    }
}
