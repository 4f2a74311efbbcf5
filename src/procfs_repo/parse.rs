// Pure parsers for /proc/stat, /proc/meminfo and thermal zone contents.
// Malformed input degrades to zeros instead of failing.

use crate::models::{CpuSnapshot, MemInfo};

/// Aggregate snapshot from the first line of /proc/stat.
///
/// Takes the first eight numbers after the label (user, nice, system, idle,
/// iowait, irq, softirq, steal). Missing or unparseable fields count as 0;
/// guest columns are ignored since the kernel already folds them into user/nice.
pub fn parse_cpu_snapshot(content: &str) -> CpuSnapshot {
    let line = content.lines().next().unwrap_or("");
    let mut fields = [0u64; 8];
    for (slot, token) in fields.iter_mut().zip(line.split_whitespace().skip(1)) {
        *slot = token.parse().unwrap_or(0);
    }
    CpuSnapshot::from_fields(fields)
}

/// MemTotal, MemAvailable, SwapTotal and SwapFree from /proc/meminfo. Absent keys read as 0.
pub fn parse_meminfo(content: &str) -> MemInfo {
    let mut info = MemInfo::default();
    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match key.trim() {
            "MemTotal" => &mut info.mem_total,
            "MemAvailable" => &mut info.mem_available,
            "SwapTotal" => &mut info.swap_total,
            "SwapFree" => &mut info.swap_free,
            _ => continue,
        };
        *slot = rest
            .split_whitespace()
            .next()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
    }
    info
}

/// Degrees Celsius from a sysfs millidegree reading such as `"48312\n"`.
pub fn parse_millidegrees(content: &str) -> Option<f64> {
    content
        .trim()
        .parse::<i64>()
        .ok()
        .map(|milli| milli as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROC_STAT: &str = "\
cpu  4705 356 584 3699176 23060 0 277 5 0 0
cpu0 1393 280 307 924709 5740 0 169 1 0 0
intr 1462898 0 0 0
";

    #[test]
    fn cpu_line_uses_first_eight_fields() {
        let s = parse_cpu_snapshot(PROC_STAT);
        assert_eq!(s.idle, 3699176 + 23060);
        assert_eq!(s.total, 3699176 + 23060 + 4705 + 356 + 584 + 277 + 5);
    }

    #[test]
    fn short_cpu_line_is_zero_padded() {
        let s = parse_cpu_snapshot("cpu 10 20 30 40\n");
        assert_eq!(s.idle, 40);
        assert_eq!(s.total, 100);
    }

    #[test]
    fn garbage_cpu_fields_read_as_zero() {
        let s = parse_cpu_snapshot("cpu 10 x 30 40 y\n");
        assert_eq!(s.idle, 40);
        assert_eq!(s.total, 80);
        assert_eq!(parse_cpu_snapshot(""), CpuSnapshot::default());
    }

    #[test]
    fn meminfo_extracts_the_four_keys() {
        let content = "\
MemTotal:        3884164 kB
MemFree:          151348 kB
MemAvailable:    1942082 kB
Buffers:          103512 kB
SwapCached:            0 kB
SwapTotal:        102396 kB
SwapFree:          51198 kB
";
        let info = parse_meminfo(content);
        assert_eq!(
            info,
            MemInfo {
                mem_total: 3884164,
                mem_available: 1942082,
                swap_total: 102396,
                swap_free: 51198,
            }
        );
    }

    #[test]
    fn meminfo_missing_keys_are_zero() {
        let info = parse_meminfo("MemTotal: 1000 kB\nMemAvailable: 500 kB\n");
        assert_eq!(info.swap_total, 0);
        assert_eq!(info.mem_swap_percent(), 25.0);
    }

    #[test]
    fn meminfo_does_not_confuse_similar_keys() {
        let info = parse_meminfo("SwapCached: 77 kB\nMemFree: 9 kB\nSwapFree: 3 kB\n");
        assert_eq!(info.swap_free, 3);
        assert_eq!(info.mem_available, 0);
    }

    #[test]
    fn millidegrees_convert_to_celsius() {
        assert_eq!(parse_millidegrees("48312\n"), Some(48.312));
        assert_eq!(parse_millidegrees("98000"), Some(98.0));
        assert_eq!(parse_millidegrees("-5000"), Some(-5.0));
        assert_eq!(parse_millidegrees("hot"), None);
        assert_eq!(parse_millidegrees(""), None);
    }
}
