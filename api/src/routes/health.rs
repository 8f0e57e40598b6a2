use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use monitor::{
    ResourceSnapshot,
    health::{HealthCheckResult, HealthChecks, HealthStatus, evaluate},
    sampler::ResourceSampler,
    state::AppState,
};
use serde::Serialize;

use crate::routes::common::run_sampler;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub container: String,
    pub checks: HealthChecks,
    pub metrics: ResourceSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn new(result: HealthCheckResult, container: &str, error: Option<String>) -> Self {
        Self {
            status: result.status,
            timestamp: Utc::now(),
            container: container.to_string(),
            checks: result.checks,
            metrics: result.metrics,
            error,
        }
    }
}

/// GET /healthz
///
/// Probe for container orchestration. Samples CPU, memory and root-disk
/// utilisation and checks each against the health threshold.
///
/// ### Responses
/// - `200 OK` - every check passed (`status: "healthy"`)
/// - `503 Service Unavailable` - at least one check failed (`status: "degraded"`),
///   or the host could not be sampled (`status: "unhealthy"`, all checks false,
///   metrics zeroed, `error` set)
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2025-05-23T18:00:00Z",
///   "container": "blue",
///   "checks": { "cpu_ok": true, "memory_ok": true, "disk_ok": true },
///   "metrics": { "cpu_percent": 12.5, "memory_percent": 40.12, "disk_percent": 63.0 }
/// }
/// ```
pub async fn health_check(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let container = &app_state.deployment().container_color;
    let sampler = app_state.sampler();

    let (result, error) = match run_sampler(move || sampler.sample_resources()).await {
        Ok(snapshot) => (evaluate(&snapshot), None),
        Err(e) => {
            tracing::warn!(error = %e, "health sampling failed, reporting unhealthy");
            (HealthCheckResult::unhealthy(), Some(e.to_string()))
        }
    };

    let status = if result.status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    if result.status == HealthStatus::Degraded {
        tracing::info!(checks = ?result.checks, metrics = ?result.metrics, "host degraded");
    }

    (status, Json(HealthResponse::new(result, container, error)))
}
