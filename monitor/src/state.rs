//! Application state shared across Axum route handlers.
//!
//! Cloned into every request through axum's `State<T>` extractor. All of it is
//! read-only after startup, so no locking is involved.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::deployment::DeploymentInfo;
use crate::sampler::SystemSampler;

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    deployment: Arc<DeploymentInfo>,
    sampler: Arc<dyn SystemSampler>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        deployment: DeploymentInfo,
        sampler: Arc<dyn SystemSampler>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            deployment: Arc::new(deployment),
            sampler,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn deployment(&self) -> &DeploymentInfo {
        &self.deployment
    }

    /// Returns a handle to the sampler that can be moved into a blocking task.
    pub fn sampler(&self) -> Arc<dyn SystemSampler> {
        Arc::clone(&self.sampler)
    }
}
