//! Threshold-based health verdict over a [`ResourceSnapshot`].

use serde::{Deserialize, Serialize};

use crate::types::ResourceSnapshot;

/// Utilisation at or above this percentage fails a check.
pub const HEALTH_THRESHOLD_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Sampled fine but at least one check failed.
    Degraded,
    /// Sampling itself failed.
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(self) -> bool {
        self == HealthStatus::Healthy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthChecks {
    pub cpu_ok: bool,
    pub memory_ok: bool,
    pub disk_ok: bool,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        self.cpu_ok && self.memory_ok && self.disk_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub checks: HealthChecks,
    pub metrics: ResourceSnapshot,
}

impl HealthCheckResult {
    /// Stand-in result for when the host could not be sampled at all.
    pub fn unhealthy() -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            checks: HealthChecks {
                cpu_ok: false,
                memory_ok: false,
                disk_ok: false,
            },
            metrics: ResourceSnapshot::default(),
        }
    }
}

/// Applies [`HEALTH_THRESHOLD_PERCENT`] to each dimension. Pure.
pub fn evaluate(snapshot: &ResourceSnapshot) -> HealthCheckResult {
    let checks = HealthChecks {
        cpu_ok: snapshot.cpu_percent < HEALTH_THRESHOLD_PERCENT,
        memory_ok: snapshot.memory_percent < HEALTH_THRESHOLD_PERCENT,
        disk_ok: snapshot.disk_percent < HEALTH_THRESHOLD_PERCENT,
    };

    let status = if checks.all_ok() {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    HealthCheckResult {
        status,
        checks,
        metrics: *snapshot,
    }
}
