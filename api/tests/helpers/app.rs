use std::sync::Arc;

use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use monitor::{
    config::AppConfig, deployment::DeploymentInfo, state::AppState, test_helpers::FakeSampler,
};
use serde_json::Value;

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "CONTAINER_COLOR" => Some("blue".into()),
        "ENVIRONMENT" => Some("test".into()),
        "APP_VERSION" => Some("2.1.0-test".into()),
        "PROCESS_LIMIT" => Some("3".into()),
        _ => None,
    })
}

/// Router wired to a scripted sampler; returns the state too so tests can
/// compare against the deployment context.
pub fn make_test_app(sampler: FakeSampler) -> (Router, AppState) {
    let config = test_config();
    let deployment = DeploymentInfo::new(&config, "test-host");
    let app_state = AppState::new(config, deployment, Arc::new(sampler));
    (routes(app_state.clone()), app_state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
