// Model formatting tests

use mayday::models::*;

#[test]
fn test_metric_sample_display_keeps_cpu_mem_temp_order() {
    let sample = MetricSample {
        cpu_percent: 12.345,
        mem_swap_percent: 40.0,
        temp_celsius: 98.0,
    };
    assert_eq!(
        sample.to_string(),
        "CPU=12.3%, MEM+SWAP=40.0%, TEMP=98.0°C"
    );
}

#[test]
fn test_metric_sample_value_by_metric() {
    let sample = MetricSample {
        cpu_percent: 1.0,
        mem_swap_percent: 2.0,
        temp_celsius: 3.0,
    };
    let values: Vec<f64> = Metric::ALL.iter().map(|m| sample.value(*m)).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
    assert_eq!(Metric::MemSwap.to_string(), "mem+swap");
}

#[test]
fn test_cpu_snapshot_from_fields_keeps_idle_within_total() {
    let s = CpuSnapshot::from_fields([1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(s, CpuSnapshot { total: 36, idle: 9 });
    assert!(s.idle <= s.total);
}
