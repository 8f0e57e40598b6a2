use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use monitor::{MonitorError, sampler::ResourceSampler, state::AppState};
use serde::Serialize;

use crate::response::ErrorResponse;
use crate::routes::common::{run_sampler, sampling_failed};

#[derive(Debug, Serialize)]
pub struct ApplicationSection {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub container: String,
    pub start_time: DateTime<Utc>,
    pub uptime_seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct SystemSection {
    pub hostname: String,
    pub platform: String,
    pub os_version: Option<String>,
    pub cpu_count: usize,
    pub memory_total_gb: f64,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub application: ApplicationSection,
    pub system: SystemSection,
}

/// GET /info
///
/// Deployment metadata plus static host facts. Uptime is measured on the
/// monotonic clock from process start.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "application": {
///     "name": "Process Monitor API",
///     "version": "2.1.0",
///     "environment": "production",
///     "container": "blue",
///     "start_time": "2025-05-23T18:00:00Z",
///     "uptime_seconds": 3600.25
///   },
///   "system": {
///     "hostname": "node-1",
///     "platform": "linux",
///     "os_version": "Linux 12 Debian GNU/Linux",
///     "cpu_count": 8,
///     "memory_total_gb": 15.54
///   }
/// }
/// ```
pub async fn get_info(State(app_state): State<AppState>) -> Result<Json<InfoResponse>, ErrorResponse> {
    let sampler = app_state.sampler();
    let host = run_sampler(move || Ok::<_, MonitorError>(sampler.host_facts()))
        .await
        .map_err(|e| sampling_failed("info", e))?;

    let config = app_state.config();
    let deployment = app_state.deployment();

    Ok(Json(InfoResponse {
        application: ApplicationSection {
            name: config.app_name.clone(),
            version: deployment.version.clone(),
            environment: deployment.environment.clone(),
            container: deployment.container_color.clone(),
            start_time: deployment.start_time,
            uptime_seconds: deployment.uptime_seconds(),
        },
        system: SystemSection {
            memory_total_gb: host.memory_total_gb(),
            hostname: host.hostname,
            platform: host.platform,
            os_version: host.os_version,
            cpu_count: host.cpu_count,
        },
    }))
}
