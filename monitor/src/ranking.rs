use crate::types::ProcessSample;

/// Returns at most `limit` processes, heaviest memory users first.
///
/// The sort is stable, so processes with equal memory keep their enumeration
/// order. `limit` is trusted; range checks belong to the caller.
pub fn top_by_memory(mut samples: Vec<ProcessSample>, limit: usize) -> Vec<ProcessSample> {
    samples.sort_by(|a, b| b.memory_percent.total_cmp(&a.memory_percent));
    samples.truncate(limit);
    samples
}
