//! Scripted sampler for exercising handlers without touching the host.

use crate::error::{MonitorError, ProcessReadError};
use crate::sampler::{ProcessSampler, ResourceSampler};
use crate::types::{HostFacts, NetworkSnapshot, ProcessSample, ResourceSnapshot};

/// A [`crate::sampler::SystemSampler`] that replays fixed readings.
///
/// `resources == None` makes every aggregate read fail with
/// `ResourceUnavailable`, which is how the tests drive the error paths.
#[derive(Debug, Clone)]
pub struct FakeSampler {
    pub processes: Vec<Result<ProcessSample, ProcessReadError>>,
    pub resources: Option<ResourceSnapshot>,
    pub network: NetworkSnapshot,
    pub host: HostFacts,
}

impl FakeSampler {
    pub fn healthy() -> Self {
        Self {
            processes: vec![
                Ok(process(1, "init", 0.1)),
                Ok(process(200, "postgres", 18.5)),
                Err(ProcessReadError::AccessDenied(201)),
                Ok(process(305, "nginx", 2.25)),
                Err(ProcessReadError::Zombie(306)),
                Ok(process(410, "api", 6.0)),
            ],
            resources: Some(ResourceSnapshot {
                cpu_percent: 23.5,
                memory_percent: 41.27,
                disk_percent: 63.0,
            }),
            network: NetworkSnapshot {
                bytes_sent: 123_456,
                bytes_recv: 654_321,
                packets_sent: 1_200,
                packets_recv: 3_400,
            },
            host: HostFacts {
                hostname: "test-host".into(),
                platform: "linux".into(),
                os_version: Some("Linux 6.1 Test".into()),
                cpu_count: 8,
                memory_total_bytes: 16 * 1024 * 1024 * 1024,
            },
        }
    }

    pub fn with_resources(mut self, snapshot: ResourceSnapshot) -> Self {
        self.resources = Some(snapshot);
        self
    }

    pub fn failing() -> Self {
        Self {
            resources: None,
            ..Self::healthy()
        }
    }
}

pub fn process(pid: u32, name: &str, memory_percent: f64) -> ProcessSample {
    ProcessSample {
        pid,
        name: name.into(),
        memory_percent,
        cpu_percent: 0.5,
    }
}

fn unavailable() -> MonitorError {
    MonitorError::unavailable("disk", "permission denied")
}

impl ProcessSampler for FakeSampler {
    fn read_processes(&self) -> Result<Vec<Result<ProcessSample, ProcessReadError>>, MonitorError> {
        if self.resources.is_none() {
            return Err(unavailable());
        }
        Ok(self.processes.clone())
    }
}

impl ResourceSampler for FakeSampler {
    fn sample_resources(&self) -> Result<ResourceSnapshot, MonitorError> {
        self.resources.ok_or_else(unavailable)
    }

    fn sample_network(&self) -> Result<NetworkSnapshot, MonitorError> {
        if self.resources.is_none() {
            return Err(unavailable());
        }
        Ok(self.network)
    }

    fn host_facts(&self) -> HostFacts {
        self.host.clone()
    }
}
