use care_frontend::config::get_configuration;
use care_frontend::startup::Application;
use service_core::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "care-frontend",
        &settings.telemetry.log_level,
        settings.telemetry.otlp_endpoint.as_deref(),
    );
    service_core::metrics::init_metrics();

    let app = Application::build(settings)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start care-frontend: {}", e))?;

    info!("Starting care-frontend on port {}", app.port());
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
