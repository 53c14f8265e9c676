//! Backend process lifetime and health polling.

use crate::config::BackendConfig;
use crate::error::ShellError;
use reqwest::Client;
use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// The spawned backend. Killed when dropped.
pub struct BackendProcess {
    child: Child,
}

impl BackendProcess {
    pub fn spawn(config: &BackendConfig) -> Result<Self, ShellError> {
        let mut command = Command::new(&config.program);
        command.args(&config.args).kill_on_drop(true);
        if let Some(dir) = &config.working_dir {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|source| ShellError::Spawn {
            program: config.program.clone(),
            source,
        })?;

        info!(
            program = %config.program.display(),
            args = ?config.args,
            pid = ?child.id(),
            "Backend started"
        );
        Ok(Self { child })
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Resolves when the backend exits on its own.
    pub async fn wait(&mut self) -> Result<ExitStatus, ShellError> {
        Ok(self.child.wait().await?)
    }

    /// Kill and reap. A backend that already exited is not an error.
    pub async fn shutdown(&mut self) -> Result<(), ShellError> {
        match self.child.try_wait()? {
            Some(status) => {
                debug!(%status, "Backend already exited");
                Ok(())
            }
            None => {
                self.child.kill().await?;
                info!("Backend stopped");
                Ok(())
            }
        }
    }
}

/// Poll `url` until it answers 2xx, at most `max_attempts` times with
/// `interval` between attempts. Returns the 1-based attempt that succeeded.
pub async fn wait_until_healthy(
    client: &Client,
    url: &str,
    interval: Duration,
    max_attempts: u32,
) -> Result<u32, ShellError> {
    for attempt in 1..=max_attempts {
        match client.get(url).timeout(interval.max(Duration::from_millis(500))).send().await {
            Ok(response) if response.status().is_success() => {
                info!(attempt, url, "Backend healthy");
                return Ok(attempt);
            }
            Ok(response) => {
                debug!(attempt, status = %response.status(), "Backend not ready");
            }
            Err(e) => {
                debug!(attempt, error = %e, "Backend not reachable yet");
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    warn!(url, max_attempts, "Backend health check timed out");
    Err(ShellError::HealthTimeout {
        url: url.to_string(),
        attempts: max_attempts,
    })
}
