use thiserror::Error;

/// Failures that abort a sampling call.
///
/// These are never retried. The HTTP layer decides per endpoint whether to mask
/// them (health probe) or surface them as a server error.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("{resource} statistics unavailable: {reason}")]
    ResourceUnavailable {
        resource: &'static str,
        reason: String,
    },

    #[error("sampling task failed: {0}")]
    SamplerTask(String),
}

impl MonitorError {
    pub fn unavailable(resource: &'static str, reason: impl Into<String>) -> Self {
        MonitorError::ResourceUnavailable {
            resource,
            reason: reason.into(),
        }
    }
}

/// Why a single process could not be read during enumeration.
///
/// Expected and frequent; the sampler drops the process and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessReadError {
    #[error("process {0} exited during sampling")]
    Exited(u32),

    #[error("access denied reading process {0}")]
    AccessDenied(u32),

    #[error("process {0} is a zombie")]
    Zombie(u32),
}
