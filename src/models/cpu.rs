// Raw kernel counters as read from the procfs pseudo-files

/// Cumulative CPU time at one instant, in kernel ticks since boot.
///
/// `idle` holds idle + iowait; `total` is `idle` plus every busy bucket
/// (user, nice, system, irq, softirq, steal). Only the difference between two
/// snapshots means anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub total: u64,
    pub idle: u64,
}

impl CpuSnapshot {
    /// Builds a snapshot from the eight leading fields of the aggregate `cpu` line,
    /// in kernel order: user, nice, system, idle, iowait, irq, softirq, steal.
    pub fn from_fields(fields: [u64; 8]) -> Self {
        let [user, nice, system, idle, iowait, irq, softirq, steal] = fields;
        let idle_all = idle.saturating_add(iowait);
        let busy = [user, nice, system, irq, softirq, steal]
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(*v));
        Self {
            total: idle_all.saturating_add(busy),
            idle: idle_all,
        }
    }
}

/// The four /proc/meminfo values used for memory+swap pressure. Units are whatever
/// the kernel reports (kB); only ratios are taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_available: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

impl MemInfo {
    /// Average of memory-used% and swap-used%.
    ///
    /// A zero total makes its term 0, so a host without swap is not reported as
    /// 100% swap used. Not clamped: inconsistent inputs may go above 100.
    pub fn mem_swap_percent(&self) -> f64 {
        let mem_used = if self.mem_total > 0 {
            (1.0 - self.mem_available as f64 / self.mem_total as f64) * 100.0
        } else {
            0.0
        };
        let swap_used = if self.swap_total > 0 {
            (1.0 - self.swap_free as f64 / self.swap_total as f64) * 100.0
        } else {
            0.0
        };
        (mem_used + swap_used) / 2.0
    }
}
