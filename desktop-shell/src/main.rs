use desktop_shell::config::get_configuration;
use service_core::observability::init_tracing;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match get_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(
        "desktop-shell",
        &config.telemetry.log_level,
        config.telemetry.otlp_endpoint.as_deref(),
    );

    match desktop_shell::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("desktop-shell failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
