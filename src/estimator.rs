// CPU utilization from two cumulative /proc/stat snapshots.
// The kernel counters only grow, so utilization is defined between two reads, never for one.

use crate::models::CpuSnapshot;

/// Utilization percent between `prev` and `cur`, always in [0, 100].
///
/// Returns 0.0 when no tick elapsed or the total went backwards. Skewed deltas
/// (idle moving more than total) are clamped instead of going negative.
pub fn estimate(prev: CpuSnapshot, cur: CpuSnapshot) -> f64 {
    let total_delta = i128::from(cur.total) - i128::from(prev.total);
    let idle_delta = i128::from(cur.idle) - i128::from(prev.idle);
    if total_delta <= 0 {
        return 0.0;
    }
    let usage = (1.0 - idle_delta as f64 / total_delta as f64) * 100.0;
    usage.clamp(0.0, 100.0)
}

/// Carries the previous snapshot from one cycle to the next.
#[derive(Debug, Clone, Copy)]
pub struct CpuEstimator {
    prev: CpuSnapshot,
}

impl CpuEstimator {
    /// Seeds with the startup snapshot, so the first `observe` covers startup → first tick.
    pub fn new(seed: CpuSnapshot) -> Self {
        Self { prev: seed }
    }

    /// Utilization since the previous snapshot; `cur` becomes the new baseline.
    pub fn observe(&mut self, cur: CpuSnapshot) -> f64 {
        let usage = estimate(self.prev, cur);
        self.prev = cur;
        usage
    }

    pub fn previous(&self) -> CpuSnapshot {
        self.prev
    }
}
