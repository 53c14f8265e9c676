//! desktop-shell: starts the care-frontend backend, waits for `/health`,
//! then opens the UI in a browser.

pub mod config;
pub mod error;
pub mod launcher;
pub mod supervisor;

pub use error::ShellError;

use crate::config::ShellConfig;
use crate::supervisor::{wait_until_healthy, BackendProcess};
use reqwest::Client;
use tracing::{error, info, warn};

/// Supervise one backend session. Returns once the backend exits or the
/// shell is interrupted; the backend is stopped on every path.
pub async fn run(config: &ShellConfig) -> Result<(), ShellError> {
    let mut backend = BackendProcess::spawn(&config.backend)?;
    let client = Client::new();

    let healthy = tokio::select! {
        result = wait_until_healthy(
            &client,
            &config.backend.health_url,
            config.backend.poll_interval(),
            config.backend.max_attempts,
        ) => result,
        status = backend.wait() => Err(ShellError::BackendExited(status?)),
    };

    if let Err(e) = healthy {
        error!(error = %e, "Backend did not come up");
        backend.shutdown().await?;
        return Err(e);
    }

    if let Err(e) = launcher::open_ui(&config.ui.url, config.ui.browser_command.as_deref()) {
        // The backend stays up; the user can still browse to the URL.
        warn!(error = %e, url = %config.ui.url, "Could not open browser");
    }

    tokio::select! {
        status = backend.wait() => {
            let status = status?;
            info!(%status, "Backend exited");
        }
        _ = service_core::shutdown::shutdown_signal() => {
            info!("Shutdown requested");
            backend.shutdown().await?;
        }
    }

    Ok(())
}
