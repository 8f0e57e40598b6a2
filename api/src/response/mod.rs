use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Envelope for error replies.
///
/// Successful endpoints return their own typed payloads, since probes and
/// scrapers depend on those exact shapes. Failures share this structure:
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "disk statistics unavailable: permission denied"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Builds an error reply; `data` is `T::default()`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Status code plus error envelope, as returned by failing handlers.
pub type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (status, Json(ApiResponse::error(message)))
}
