// Domain models: raw counters and derived metrics

mod cpu;
mod sample;

pub use cpu::{CpuSnapshot, MemInfo};
pub use sample::{Metric, MetricSample};
