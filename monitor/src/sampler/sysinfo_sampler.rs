use std::time::Duration;

use sysinfo::{
    CpuRefreshKind, Disks, MemoryRefreshKind, Networks, ProcessRefreshKind, ProcessStatus,
    ProcessesToUpdate, RefreshKind, System,
};

use super::{ProcessSampler, ResourceSampler};
use crate::error::{MonitorError, ProcessReadError};
use crate::types::{HostFacts, NetworkSnapshot, ProcessSample, ResourceSnapshot, round2};

/// Default platform adapter built on `sysinfo`.
///
/// Every call builds a fresh `System`, so concurrent requests share nothing.
/// CPU figures (host and per process) are measured across `cpu_interval`:
/// refresh, sleep, refresh again. The sleep blocks the calling thread, so
/// async callers should go through `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct SysinfoSampler {
    cpu_interval: Duration,
}

impl SysinfoSampler {
    pub fn new(cpu_interval: Duration) -> Self {
        Self { cpu_interval }
    }

    pub fn cpu_interval(&self) -> Duration {
        self.cpu_interval
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl ProcessSampler for SysinfoSampler {
    fn read_processes(&self) -> Result<Vec<Result<ProcessSample, ProcessReadError>>, MonitorError> {
        let mut sys = System::new();
        sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        let total_memory = sys.total_memory();
        if total_memory == 0 {
            return Err(MonitorError::unavailable(
                "memory",
                "total memory reported as zero",
            ));
        }

        let kind = ProcessRefreshKind::nothing().with_memory().with_cpu();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, kind);
        std::thread::sleep(self.cpu_interval);
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, kind);

        let mut processes: Vec<_> = sys.processes().values().collect();
        processes.sort_by_key(|p| p.pid().as_u32());

        let reads = processes
            .into_iter()
            .map(|proc| {
                let pid = proc.pid().as_u32();
                if let Some(err) = unreadable(pid, proc.status(), proc.memory()) {
                    return Err(err);
                }
                Ok(ProcessSample {
                    pid,
                    name: proc.name().to_string_lossy().to_string(),
                    memory_percent: round2(proc.memory() as f64 / total_memory as f64 * 100.0),
                    cpu_percent: round2(f64::from(proc.cpu_usage())),
                })
            })
            .collect();

        Ok(reads)
    }
}

impl ResourceSampler for SysinfoSampler {
    fn sample_resources(&self) -> Result<ResourceSnapshot, MonitorError> {
        let mut sys = System::new();

        sys.refresh_cpu_usage();
        std::thread::sleep(self.cpu_interval);
        sys.refresh_cpu_usage();
        let cpu_percent = f64::from(sys.global_cpu_usage()).clamp(0.0, 100.0);

        sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        let total = sys.total_memory();
        if total == 0 {
            return Err(MonitorError::unavailable(
                "memory",
                "total memory reported as zero",
            ));
        }
        let used = total.saturating_sub(sys.available_memory());
        let memory_percent = used as f64 / total as f64 * 100.0;

        let disk_percent = root_disk_percent()?;

        Ok(ResourceSnapshot {
            cpu_percent: round2(cpu_percent),
            memory_percent: round2(memory_percent),
            disk_percent: round2(disk_percent),
        })
    }

    fn sample_network(&self) -> Result<NetworkSnapshot, MonitorError> {
        let networks = Networks::new_with_refreshed_list();
        let snapshot = networks
            .list()
            .values()
            .fold(NetworkSnapshot::default(), |acc, data| NetworkSnapshot {
                bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
                bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
                packets_sent: acc
                    .packets_sent
                    .saturating_add(data.total_packets_transmitted()),
                packets_recv: acc
                    .packets_recv
                    .saturating_add(data.total_packets_received()),
            });
        Ok(snapshot)
    }

    fn host_facts(&self) -> HostFacts {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        HostFacts {
            hostname: System::host_name().unwrap_or_else(|| "unknown".into()),
            platform: std::env::consts::OS.to_string(),
            os_version: System::long_os_version(),
            cpu_count: sys.cpus().len(),
            memory_total_bytes: sys.total_memory(),
        }
    }
}

/// sysinfo has no access-denied signal: a process it may not inspect comes
/// back with an unknown status and zeroed counters.
fn unreadable(pid: u32, status: ProcessStatus, memory: u64) -> Option<ProcessReadError> {
    match status {
        ProcessStatus::Zombie => Some(ProcessReadError::Zombie(pid)),
        ProcessStatus::Dead => Some(ProcessReadError::Exited(pid)),
        ProcessStatus::Unknown(_) if memory == 0 => Some(ProcessReadError::AccessDenied(pid)),
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct MountedDisk {
    mount_point: String,
    total: u64,
    available: u64,
}

/// Prefer the disk mounted at "/", otherwise the shortest mount path.
fn mount_score(mp: &str) -> (u8, usize) {
    let root_rank = if mp == "/" { 0 } else { 1 };
    (root_rank, mp.len())
}

fn pick_primary_disk(disks: Vec<MountedDisk>) -> Option<MountedDisk> {
    disks
        .into_iter()
        .filter(|d| d.total > 0)
        .min_by_key(|d| mount_score(&d.mount_point))
}

fn root_disk_percent() -> Result<f64, MonitorError> {
    let disks = Disks::new_with_refreshed_list();
    let mounted: Vec<MountedDisk> = disks
        .list()
        .iter()
        .map(|d| MountedDisk {
            mount_point: d.mount_point().to_string_lossy().to_string(),
            total: d.total_space(),
            available: d.available_space(),
        })
        .collect();

    let disk = pick_primary_disk(mounted)
        .ok_or_else(|| MonitorError::unavailable("disk", "no mounted filesystem found"))?;

    let used = disk.total.saturating_sub(disk.available);
    Ok(used as f64 / disk.total as f64 * 100.0)
}
