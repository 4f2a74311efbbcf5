// Kernel counters via procfs/sysfs pseudo-files

mod host;
mod parse;

pub use host::{HostIdentity, host_identity};
pub use parse::{parse_cpu_snapshot, parse_meminfo, parse_millidegrees};

use crate::config::AppConfig;
use crate::models::{CpuSnapshot, MemInfo};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a temperature reading is missing. The caller decides the fallback.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("failed to read sensor {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sensor {} returned {value:?}, expected integer millidegrees", .path.display())]
    Parse { path: PathBuf, value: String },
}

pub struct ProcfsRepo {
    cpu_stat_path: PathBuf,
    meminfo_path: PathBuf,
    temperature_path: PathBuf,
}

impl ProcfsRepo {
    pub fn new(
        cpu_stat_path: impl Into<PathBuf>,
        meminfo_path: impl Into<PathBuf>,
        temperature_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cpu_stat_path: cpu_stat_path.into(),
            meminfo_path: meminfo_path.into(),
            temperature_path: temperature_path.into(),
        }
    }

    /// Sources from config; the sensor path already reflects dry-run.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.sources.cpu_stat_path,
            &config.sources.meminfo_path,
            config.temperature_path(),
        )
    }

    pub fn temperature_path(&self) -> &Path {
        &self.temperature_path
    }

    #[instrument(skip(self), fields(repo = "procfs", operation = "get_cpu_snapshot"))]
    pub async fn get_cpu_snapshot(&self) -> Result<CpuSnapshot, SampleError> {
        let content = read(&self.cpu_stat_path).await?;
        Ok(parse_cpu_snapshot(&content))
    }

    #[instrument(skip(self), fields(repo = "procfs", operation = "get_mem_info"))]
    pub async fn get_mem_info(&self) -> Result<MemInfo, SampleError> {
        let content = read(&self.meminfo_path).await?;
        Ok(parse_meminfo(&content))
    }

    pub async fn get_mem_swap_percent(&self) -> Result<f64, SampleError> {
        Ok(self.get_mem_info().await?.mem_swap_percent())
    }

    #[instrument(skip(self), fields(repo = "procfs", operation = "get_temperature"))]
    pub async fn get_temperature(&self) -> Result<f64, SensorError> {
        let content = tokio::fs::read_to_string(&self.temperature_path)
            .await
            .map_err(|source| SensorError::Read {
                path: self.temperature_path.clone(),
                source,
            })?;
        parse_millidegrees(&content).ok_or_else(|| SensorError::Parse {
            path: self.temperature_path.clone(),
            value: content.trim().to_string(),
        })
    }
}

async fn read(path: &Path) -> Result<String, SampleError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SampleError::Read {
            path: path.to_path_buf(),
            source,
        })
}
