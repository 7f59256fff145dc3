use chat_gateway::config::GatewayConfig;
use chat_gateway::services::init_metrics;
use chat_gateway::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), service_core::error::AppError> {
    let config = GatewayConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics();

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting chat gateway"
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
