//! Host introspection core for the process monitor service.
//!
//! Everything here is independent of the HTTP layer: samplers read OS state,
//! the health evaluator and the ranking/exposition helpers are pure functions
//! over those samples, and [`state::AppState`] bundles the process-wide,
//! read-only context that request handlers receive.

pub mod config;
pub mod deployment;
pub mod error;
pub mod exposition;
pub mod health;
pub mod ranking;
pub mod sampler;
pub mod state;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod types;

pub use error::{MonitorError, ProcessReadError};
pub use types::{HostFacts, NetworkSnapshot, ProcessSample, ResourceSnapshot};
