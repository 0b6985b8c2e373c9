use anyhow::Result;
use inspector_model::bedrock::{BedrockConfig, BedrockGateway};
use inspector_server::{ServerConfig, create_app};
use std::sync::Arc;

pub async fn run_serve(
    port: u16,
    region: String,
    model_id: String,
    endpoint_url: Option<String>,
) -> Result<()> {
    if let Err(e) = inspector_telemetry::init_telemetry("windshield-inspector") {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    let mut bedrock_config = BedrockConfig::new(region, model_id);
    if let Some(url) = endpoint_url {
        bedrock_config = bedrock_config.with_endpoint_url(url);
    }

    let gateway = Arc::new(BedrockGateway::new(bedrock_config).await?);
    let config = ServerConfig::new(gateway);
    let app = create_app(config);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Windshield Inspector listening on http://{}", addr);
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).await?;

    Ok(())
}
