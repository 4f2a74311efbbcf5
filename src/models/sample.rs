// Per-cycle derived metrics

use std::fmt;

/// One evaluation input: the three metrics compared against the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricSample {
    /// Utilization over the last interval, in [0, 100].
    pub cpu_percent: f64,
    /// Combined memory+swap pressure. Not clamped.
    pub mem_swap_percent: f64,
    /// Sensor temperature; 0.0 when the sensor could not be read.
    pub temp_celsius: f64,
}

impl MetricSample {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu_percent,
            Metric::MemSwap => self.mem_swap_percent,
            Metric::Temperature => self.temp_celsius,
        }
    }
}

impl fmt::Display for MetricSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU={:.1}%, MEM+SWAP={:.1}%, TEMP={:.1}°C",
            self.cpu_percent, self.mem_swap_percent, self.temp_celsius
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    MemSwap,
    Temperature,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::MemSwap, Metric::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::MemSwap => "mem+swap",
            Metric::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
