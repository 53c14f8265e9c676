use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Failed to start backend {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Backend at {url} not healthy after {attempts} attempts")]
    HealthTimeout { url: String, attempts: u32 },

    #[error("Backend exited before becoming healthy ({0})")]
    BackendExited(ExitStatus),

    #[error("Failed to open UI with {program}: {source}")]
    Browser {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Backend process I/O failed: {0}")]
    Process(#[from] std::io::Error),
}
