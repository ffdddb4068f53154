use gemini_gateway::config::GatewayConfig;
use gemini_gateway::services::init_metrics;
use gemini_gateway::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "gemini-gateway",
        &config.telemetry.log_level,
        config.telemetry.otlp_endpoint.as_deref(),
    );

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start gemini-gateway: {}", e))?;

    tracing::info!("Starting gemini-gateway on port {}", app.port());
    app.run_until_stopped().await?;

    Ok(())
}
