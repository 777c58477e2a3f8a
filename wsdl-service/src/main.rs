use service_core::observability::init_tracing;
use wsdl_service::{config::WsdlConfig, Application};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WsdlConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(&config.service_name, &config.telemetry)?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
