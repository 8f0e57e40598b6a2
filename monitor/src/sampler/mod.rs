//! Sampler interfaces and the default platform adapter.
//!
//! Ranking, health evaluation and formatting only ever see the types in
//! [`crate::types`]; OS specifics stay behind [`ProcessSampler`] and
//! [`ResourceSampler`].

mod sysinfo_sampler;

pub use sysinfo_sampler::SysinfoSampler;

use crate::error::{MonitorError, ProcessReadError};
use crate::types::{HostFacts, NetworkSnapshot, ProcessSample, ResourceSnapshot};

/// Enumerates OS processes.
pub trait ProcessSampler: Send + Sync {
    /// One entry per process visible to the current user, failed reads included.
    fn read_processes(&self) -> Result<Vec<Result<ProcessSample, ProcessReadError>>, MonitorError>;

    /// Every readable process, in enumeration order.
    ///
    /// Processes that exited, are zombies or deny access are dropped without
    /// affecting the rest of the set.
    fn sample_processes(&self) -> Result<Vec<ProcessSample>, MonitorError> {
        let reads = self.read_processes()?;
        Ok(collect_readable(reads))
    }
}

/// Reads aggregate host counters.
pub trait ResourceSampler: Send + Sync {
    fn sample_resources(&self) -> Result<ResourceSnapshot, MonitorError>;

    fn sample_network(&self) -> Result<NetworkSnapshot, MonitorError>;

    fn host_facts(&self) -> HostFacts;
}

/// Everything the HTTP layer needs from the host.
pub trait SystemSampler: ProcessSampler + ResourceSampler {}

impl<T: ProcessSampler + ResourceSampler> SystemSampler for T {}

fn collect_readable(
    reads: Vec<Result<ProcessSample, ProcessReadError>>,
) -> Vec<ProcessSample> {
    let mut skipped = 0usize;
    let samples: Vec<ProcessSample> = reads
        .into_iter()
        .filter_map(|read| match read {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::trace!(reason = %e, "skipping process");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(kept = samples.len(), skipped, "process enumeration finished");
    }
    samples
}
