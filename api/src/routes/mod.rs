//! HTTP route entry point.
//!
//! - `/` → deployment summary and endpoint index
//! - `/processes` → top processes by memory
//! - `/healthz` → liveness/readiness probe
//! - `/metrics` → plain-text metrics exposition
//! - `/info` → application and host information

use axum::{Router, routing::get};
use monitor::state::AppState;

pub mod common;
pub mod health;
pub mod info;
pub mod metrics;
pub mod processes;
pub mod root;

pub const PROCESSES_PATH: &str = "/processes";
pub const HEALTH_PATH: &str = "/healthz";
pub const METRICS_PATH: &str = "/metrics";
pub const INFO_PATH: &str = "/info";

/// Builds the application router with state already attached.
///
/// Middleware (CORS, request logging) is layered on by the caller.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route(PROCESSES_PATH, get(processes::list_processes))
        .route(HEALTH_PATH, get(health::health_check))
        .route(METRICS_PATH, get(metrics::get_metrics))
        .route(INFO_PATH, get(info::get_info))
        .with_state(app_state)
}
