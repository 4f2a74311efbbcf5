use anyhow::Result;
use mayday::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let app_config = config::AppConfig::load()?;
    let host = procfs_repo::host_identity();
    tracing::info!(
        host = %host.host_name,
        os = %host.os_name,
        os_version = %host.os_version,
        kernel = %host.kernel_version,
        "{} {} starting",
        version::NAME,
        version::VERSION
    );
    tracing::info!(
        threshold = app_config.monitor.threshold,
        sample_interval_secs = app_config.monitor.sample_interval_secs,
        temperature_path = %app_config.temperature_path().display(),
        "Monitoring"
    );
    if app_config.monitor.dry_run {
        tracing::warn!("DRY RUN ENABLED: the host will NOT be shut down");
    }

    let monitor = monitor::Monitor::new(&app_config).await;

    tokio::select! {
        _ = monitor.run() => {}
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
        }
    }

    Ok(())
}
