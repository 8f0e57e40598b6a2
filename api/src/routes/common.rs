use axum::http::StatusCode;
use monitor::MonitorError;
use validator::ValidationErrors;

use crate::response::{ErrorResponse, error_response};

/// Runs a blocking sampler call off the async runtime.
///
/// CPU sampling sleeps for the configured interval, so it must never run on a
/// runtime worker thread.
pub async fn run_sampler<T, F>(sample: F) -> Result<T, MonitorError>
where
    F: FnOnce() -> Result<T, MonitorError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(sample)
        .await
        .map_err(|e| MonitorError::SamplerTask(e.to_string()))?
}

/// Logs a sampling failure and maps it to a 500 reply.
pub fn sampling_failed(endpoint: &str, err: MonitorError) -> ErrorResponse {
    tracing::error!(endpoint, error = %err, "sampling failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
