use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub actuator: ActuatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    /// Shared limit for CPU %, MEM+SWAP % and temperature in °C.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_sample_interval_secs")]
    pub sample_interval_secs: u64,
    /// Log instead of shutting down, and read the fake sensor.
    #[serde(default)]
    pub dry_run: bool,
}

fn default_threshold() -> f64 {
    97.0
}

fn default_sample_interval_secs() -> u64 {
    2
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            sample_interval_secs: default_sample_interval_secs(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default = "default_cpu_stat_path")]
    pub cpu_stat_path: PathBuf,
    #[serde(default = "default_meminfo_path")]
    pub meminfo_path: PathBuf,
    #[serde(default = "default_temperature_path")]
    pub temperature_path: PathBuf,
    /// Sensor read instead of `temperature_path` when dry-run is on.
    #[serde(default = "default_dry_run_temperature_path")]
    pub dry_run_temperature_path: PathBuf,
}

fn default_cpu_stat_path() -> PathBuf {
    "/proc/stat".into()
}

fn default_meminfo_path() -> PathBuf {
    "/proc/meminfo".into()
}

fn default_temperature_path() -> PathBuf {
    "/sys/class/thermal/thermal_zone0/temp".into()
}

fn default_dry_run_temperature_path() -> PathBuf {
    "/tmp/fake_temp".into()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            cpu_stat_path: default_cpu_stat_path(),
            meminfo_path: default_meminfo_path(),
            temperature_path: default_temperature_path(),
            dry_run_temperature_path: default_dry_run_temperature_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActuatorConfig {
    /// Program and arguments run on breach. Must not prompt.
    #[serde(default = "default_shutdown_command")]
    pub shutdown_command: Vec<String>,
}

fn default_shutdown_command() -> Vec<String> {
    ["sudo", "shutdown", "-f", "now"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            shutdown_command: default_shutdown_command(),
        }
    }
}

impl AppConfig {
    /// Loads `CONFIG_FILE` (or `config.toml`), then applies `MAYDAY_*` overrides.
    /// Without `CONFIG_FILE`, a missing `config.toml` means built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::parse(&std::fs::read_to_string(&path)?)?,
            Err(_) => match std::fs::read_to_string(DEFAULT_CONFIG_PATH) {
                Ok(s) => Self::parse(&s)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
                Err(e) => return Err(e.into()),
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config = Self::parse(s)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Applies `MAYDAY_DRY_RUN`, `MAYDAY_THRESHOLD` and `MAYDAY_SAMPLE_INTERVAL_SECS`
    /// as returned by `var`. Does not re-validate.
    pub fn apply_overrides<F>(&mut self, var: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("MAYDAY_DRY_RUN") {
            self.monitor.dry_run = parse_bool(&v).ok_or_else(|| {
                anyhow::anyhow!("MAYDAY_DRY_RUN must be a boolean (1/0, true/false, yes/no, on/off), got {v:?}")
            })?;
        }
        if let Some(v) = var("MAYDAY_THRESHOLD") {
            self.monitor.threshold = v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("MAYDAY_THRESHOLD must be a number, got {v:?}: {e}"))?;
        }
        if let Some(v) = var("MAYDAY_SAMPLE_INTERVAL_SECS") {
            self.monitor.sample_interval_secs = v.trim().parse().map_err(|e| {
                anyhow::anyhow!("MAYDAY_SAMPLE_INTERVAL_SECS must be an integer, got {v:?}: {e}")
            })?;
        }
        Ok(())
    }

    /// Sensor to sample, resolved against dry-run.
    pub fn temperature_path(&self) -> &Path {
        if self.monitor.dry_run {
            &self.sources.dry_run_temperature_path
        } else {
            &self.sources.temperature_path
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitor.threshold.is_finite() && self.monitor.threshold > 0.0,
            "monitor.threshold must be a finite number > 0, got {}",
            self.monitor.threshold
        );
        anyhow::ensure!(
            self.monitor.sample_interval_secs > 0,
            "monitor.sample_interval_secs must be > 0, got {}",
            self.monitor.sample_interval_secs
        );
        for (name, path) in [
            ("sources.cpu_stat_path", &self.sources.cpu_stat_path),
            ("sources.meminfo_path", &self.sources.meminfo_path),
            ("sources.temperature_path", &self.sources.temperature_path),
            (
                "sources.dry_run_temperature_path",
                &self.sources.dry_run_temperature_path,
            ),
        ] {
            anyhow::ensure!(!path.as_os_str().is_empty(), "{name} must be non-empty");
        }
        anyhow::ensure!(
            self.actuator
                .shutdown_command
                .first()
                .is_some_and(|program| !program.is_empty()),
            "actuator.shutdown_command must name a program"
        );
        Ok(())
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
