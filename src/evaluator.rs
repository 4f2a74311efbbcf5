// Threshold check: any single metric strictly above the threshold is enough.
// No hysteresis or debounce, one breaching sample triggers.

use crate::models::{Metric, MetricSample};

pub fn should_trigger(
    cpu_percent: f64,
    mem_swap_percent: f64,
    temp_celsius: f64,
    threshold: f64,
) -> bool {
    cpu_percent > threshold || mem_swap_percent > threshold || temp_celsius > threshold
}

/// Metrics of `sample` strictly above `threshold`, in CPU, MEM+SWAP, TEMP order.
/// Non-empty exactly when [`should_trigger`] is true.
pub fn breaches(sample: &MetricSample, threshold: f64) -> Vec<Metric> {
    Metric::ALL
        .into_iter()
        .filter(|m| sample.value(*m) > threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_metric_over_threshold_triggers() {
        assert!(should_trigger(98.0, 10.0, 10.0, 97.0));
        assert!(should_trigger(10.0, 97.5, 10.0, 97.0));
        assert!(should_trigger(10.0, 10.0, 98.0, 97.0));
    }

    #[test]
    fn exactly_at_threshold_does_not_trigger() {
        assert!(!should_trigger(97.0, 97.0, 97.0, 97.0));
        assert!(!should_trigger(0.0, 0.0, 0.0, 97.0));
    }

    #[test]
    fn breaches_lists_crossed_metrics_in_order() {
        let sample = MetricSample {
            cpu_percent: 99.0,
            mem_swap_percent: 50.0,
            temp_celsius: 101.0,
        };
        assert_eq!(
            breaches(&sample, 97.0),
            vec![Metric::Cpu, Metric::Temperature]
        );
        assert!(breaches(&sample, 200.0).is_empty());
    }

    #[test]
    fn breaches_agree_with_should_trigger() {
        let samples = [
            MetricSample {
                cpu_percent: 97.0,
                mem_swap_percent: 97.0,
                temp_celsius: 97.0,
            },
            MetricSample {
                cpu_percent: 97.1,
                mem_swap_percent: 0.0,
                temp_celsius: 0.0,
            },
            MetricSample {
                cpu_percent: 0.0,
                mem_swap_percent: 140.0,
                temp_celsius: 0.0,
            },
        ];
        for s in samples {
            assert_eq!(
                !breaches(&s, 97.0).is_empty(),
                should_trigger(s.cpu_percent, s.mem_swap_percent, s.temp_celsius, 97.0)
            );
        }
    }
}
