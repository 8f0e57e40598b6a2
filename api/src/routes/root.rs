use std::collections::BTreeMap;

use axum::{Json, extract::State};
use monitor::{deployment::DeploymentInfo, state::AppState};
use serde::Serialize;

use crate::routes::{HEALTH_PATH, INFO_PATH, METRICS_PATH, PROCESSES_PATH};

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub deployment: DeploymentInfo,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET /
///
/// Service name, this instance's deployment metadata and an index of the
/// available endpoints.
pub async fn root(State(app_state): State<AppState>) -> Json<RootResponse> {
    let endpoints = BTreeMap::from([
        ("processes", PROCESSES_PATH),
        ("health", HEALTH_PATH),
        ("metrics", METRICS_PATH),
        ("info", INFO_PATH),
    ]);

    Json(RootResponse {
        message: app_state.config().app_name.clone(),
        deployment: app_state.deployment().clone(),
        endpoints,
    })
}
