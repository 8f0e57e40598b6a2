use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use monitor::{ProcessSample, ranking::top_by_memory, sampler::ProcessSampler, state::AppState};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::{ErrorResponse, error_response};
use crate::routes::common::{format_validation_errors, run_sampler, sampling_failed};

const LIMIT_RANGE_MESSAGE: &str = "limit must be between 1 and 200";

#[derive(Debug, Deserialize, Validate)]
pub struct ProcessesQuery {
    #[validate(range(min = 1, max = 200, message = "limit must be between 1 and 200"))]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ProcessListResponse {
    pub timestamp: DateTime<Utc>,
    pub count: usize,
    pub processes: Vec<ProcessSample>,
}

/// GET /processes
///
/// Running processes sorted by memory usage, heaviest first.
///
/// ### Query Parameters
/// - `limit` (optional): number of processes to return (default from
///   `PROCESS_LIMIT`, min 1, max 200)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "timestamp": "2025-05-23T18:00:00Z",
///   "count": 2,
///   "processes": [
///     { "pid": 812, "name": "postgres", "memory_percent": 18.5, "cpu_percent": 1.2 },
///     { "pid": 97, "name": "nginx", "memory_percent": 2.25, "cpu_percent": 0.0 }
///   ]
/// }
/// ```
/// - `400 Bad Request` - `limit` is not an integer or is out of range
/// - `500 Internal Server Error` - the process table could not be read
pub async fn list_processes(
    State(app_state): State<AppState>,
    query: Result<Query<ProcessesQuery>, QueryRejection>,
) -> Result<Json<ProcessListResponse>, ErrorResponse> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected /processes query");
        error_response(StatusCode::BAD_REQUEST, LIMIT_RANGE_MESSAGE)
    })?;

    if let Err(e) = query.validate() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format_validation_errors(&e),
        ));
    }

    let limit = query.limit.unwrap_or(app_state.config().process_limit);
    let sampler = app_state.sampler();

    let samples = run_sampler(move || sampler.sample_processes())
        .await
        .map_err(|e| sampling_failed("processes", e))?;

    let processes = top_by_memory(samples, limit);

    Ok(Json(ProcessListResponse {
        timestamp: Utc::now(),
        count: processes.len(),
        processes,
    }))
}
