// Emergency shutdown: the real command, or a no-op under dry-run

use crate::config::AppConfig;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Dry-run: nothing was executed.
    Simulated,
    /// The command was spawned; completion is not awaited.
    Issued { pid: Option<u32> },
}

#[derive(Debug, Error)]
pub enum ActuatorError {
    #[error("shutdown command is empty")]
    EmptyCommand,
    #[error("failed to spawn shutdown command {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait Actuator: Send + Sync {
    fn trigger_shutdown(&self) -> Result<ShutdownOutcome, ActuatorError>;
}

/// Runs a privileged shutdown command without waiting for it.
pub struct CommandActuator {
    command: Vec<String>,
}

impl CommandActuator {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Actuator for CommandActuator {
    fn trigger_shutdown(&self) -> Result<ShutdownOutcome, ActuatorError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(ActuatorError::EmptyCommand)?;
        // Child handle dropped on purpose: the host is going down, tokio reaps it if not.
        let child = tokio::process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| ActuatorError::Spawn {
                program: program.clone(),
                source,
            })?;
        let pid = child.id();
        info!(command = ?self.command, pid, "Shutdown command issued");
        Ok(ShutdownOutcome::Issued { pid })
    }
}

pub struct DryRunActuator;

impl Actuator for DryRunActuator {
    fn trigger_shutdown(&self) -> Result<ShutdownOutcome, ActuatorError> {
        debug!("dry run: no shutdown command executed");
        Ok(ShutdownOutcome::Simulated)
    }
}

/// Picks the actuator once at startup from the resolved dry-run flag.
pub fn from_config(config: &AppConfig) -> Box<dyn Actuator> {
    if config.monitor.dry_run {
        Box::new(DryRunActuator)
    } else {
        Box::new(CommandActuator::new(config.actuator.shutdown_command.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_actuator_simulates() {
        assert_eq!(
            DryRunActuator.trigger_shutdown().unwrap(),
            ShutdownOutcome::Simulated
        );
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = CommandActuator::new(vec![]).trigger_shutdown().unwrap_err();
        assert!(matches!(err, ActuatorError::EmptyCommand));
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let actuator = CommandActuator::new(vec!["/nonexistent/mayday-shutdown".into()]);
        let err = actuator.trigger_shutdown().unwrap_err();
        assert!(err.to_string().contains("mayday-shutdown"));
    }

    #[tokio::test]
    async fn command_is_spawned_with_args() {
        let actuator = CommandActuator::new(vec!["true".into(), "--ignored".into()]);
        let outcome = actuator.trigger_shutdown().unwrap();
        assert!(matches!(outcome, ShutdownOutcome::Issued { .. }));
    }

    #[test]
    fn dry_run_config_never_selects_the_command() {
        let mut config = AppConfig::default();
        config.monitor.dry_run = true;
        config.actuator.shutdown_command = vec!["/nonexistent/mayday-shutdown".into()];
        let outcome = from_config(&config).trigger_shutdown().unwrap();
        assert_eq!(outcome, ShutdownOutcome::Simulated);
    }
}
