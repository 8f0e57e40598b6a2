use serde::{Deserialize, Serialize};

/// One live OS process at sample time.
///
/// `pid` is only meaningful within a single sample set; the OS may reuse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub memory_percent: f64,
    pub cpu_percent: f64,
}

/// Point-in-time aggregate host utilisation, each figure in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
}

/// Cumulative network counters summed over every interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

/// Static facts about the host, reported by the info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostFacts {
    pub hostname: String,
    pub platform: String,
    pub os_version: Option<String>,
    pub cpu_count: usize,
    pub memory_total_bytes: u64,
}

impl HostFacts {
    pub fn memory_total_gb(&self) -> f64 {
        round2(self.memory_total_bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Rounds to two decimal places so repeated renders of the same reading agree.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
