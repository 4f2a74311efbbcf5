// Sampling loop: read counters, estimate CPU, evaluate, actuate, sleep, repeat.
// Every metric source degrades to a safe value; nothing in a cycle aborts the loop.

use crate::actuator::{self, Actuator, ActuatorError, ShutdownOutcome};
use crate::config::AppConfig;
use crate::estimator::CpuEstimator;
use crate::evaluator;
use crate::models::{Metric, MetricSample};
use crate::procfs_repo::ProcfsRepo;
use tokio::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// What one cycle observed and did.
#[derive(Debug)]
pub struct CycleReport {
    pub sample: MetricSample,
    /// Metrics strictly above the threshold; empty when nothing was triggered.
    pub breaches: Vec<Metric>,
    /// Set only when a breach invoked the actuator.
    pub shutdown: Option<Result<ShutdownOutcome, ActuatorError>>,
}

impl CycleReport {
    pub fn triggered(&self) -> bool {
        !self.breaches.is_empty()
    }
}

pub struct Monitor {
    repo: ProcfsRepo,
    /// None until the first successful /proc/stat read.
    estimator: Option<CpuEstimator>,
    actuator: Box<dyn Actuator>,
    threshold: f64,
    interval: Duration,
    dry_run: bool,
}

impl Monitor {
    /// Builds the monitor with the actuator selected by `config.monitor.dry_run`
    /// and takes the seed CPU snapshot.
    pub async fn new(config: &AppConfig) -> Self {
        Self::with_actuator(config, actuator::from_config(config)).await
    }

    pub async fn with_actuator(config: &AppConfig, actuator: Box<dyn Actuator>) -> Self {
        let repo = ProcfsRepo::from_config(config);
        let estimator = match repo.get_cpu_snapshot().await {
            Ok(seed) => Some(CpuEstimator::new(seed)),
            Err(e) => {
                warn!(error = %e, operation = "seed_cpu_snapshot", "CPU seed read failed");
                None
            }
        };
        Self {
            repo,
            estimator,
            actuator,
            threshold: config.monitor.threshold,
            interval: Duration::from_secs(config.monitor.sample_interval_secs),
            dry_run: config.monitor.dry_run,
        }
    }

    /// Runs forever; ends only with the process or the host.
    #[instrument(skip(self), fields(interval_secs = self.interval.as_secs(), dry_run = self.dry_run))]
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    pub async fn run_cycle(&mut self) -> CycleReport {
        let sample = MetricSample {
            cpu_percent: self.sample_cpu().await,
            mem_swap_percent: self.sample_mem_swap().await,
            temp_celsius: self.sample_temperature().await,
        };

        let marker = if self.dry_run { " DRY_RUN" } else { "" };
        info!("{sample}{marker}");

        let breaches = evaluator::breaches(&sample, self.threshold);
        if breaches.is_empty() {
            return CycleReport {
                sample,
                breaches,
                shutdown: None,
            };
        }

        let breached = breaches
            .iter()
            .map(Metric::as_str)
            .collect::<Vec<_>>()
            .join(",");
        if self.dry_run {
            warn!(
                breached = %breached,
                threshold = self.threshold,
                "DRY RUN: threshold crossed, would shut down now"
            );
        } else {
            error!(
                breached = %breached,
                threshold = self.threshold,
                "Threshold crossed, shutting down now"
            );
        }

        let shutdown = self.actuator.trigger_shutdown();
        if let Err(e) = &shutdown {
            error!(error = %e, operation = "trigger_shutdown", "Shutdown failed");
        }
        CycleReport {
            sample,
            breaches,
            shutdown: Some(shutdown),
        }
    }

    async fn sample_cpu(&mut self) -> f64 {
        let cur = match self.repo.get_cpu_snapshot().await {
            Ok(s) => s,
            Err(e) => {
                // Baseline is kept so the next good read spans the gap.
                warn!(error = %e, operation = "get_cpu_snapshot", "CPU stats failed");
                return 0.0;
            }
        };
        match &mut self.estimator {
            Some(est) => est.observe(cur),
            None => {
                self.estimator = Some(CpuEstimator::new(cur));
                0.0
            }
        }
    }

    async fn sample_mem_swap(&self) -> f64 {
        match self.repo.get_mem_swap_percent().await {
            Ok(pct) => pct,
            Err(e) => {
                warn!(error = %e, operation = "get_mem_swap_percent", "Memory stats failed");
                0.0
            }
        }
    }

    async fn sample_temperature(&self) -> f64 {
        match self.repo.get_temperature().await {
            Ok(celsius) => celsius,
            Err(e) => {
                debug!(error = %e, operation = "get_temperature", "Sensor unavailable, using 0.0");
                0.0
            }
        }
    }
}
