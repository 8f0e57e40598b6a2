use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use monitor::{exposition::format_exposition, sampler::ResourceSampler, state::AppState};

use crate::routes::common::{run_sampler, sampling_failed};

pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// GET /metrics
///
/// Host utilisation and network counters in the plain-text exposition format,
/// for external scrapers.
///
/// ### Responses
/// - `200 OK` (`text/plain`)
/// ```text
/// # HELP cpu_usage_percent CPU usage percentage
/// # TYPE cpu_usage_percent gauge
/// cpu_usage_percent 12.5
/// ...
/// ```
/// - `500 Internal Server Error` - host counters could not be read
pub async fn get_metrics(State(app_state): State<AppState>) -> Response {
    let sampler = app_state.sampler();

    let sampled = run_sampler(move || {
        let snapshot = sampler.sample_resources()?;
        let network = sampler.sample_network()?;
        Ok((snapshot, network))
    })
    .await;

    match sampled {
        Ok((snapshot, network)) => (
            [(CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
            format_exposition(&snapshot, &network),
        )
            .into_response(),
        Err(e) => sampling_failed("metrics", e).into_response(),
    }
}
