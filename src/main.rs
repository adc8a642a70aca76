use mcp_spoonacular::{client::SpoonacularClient, server::SpoonacularMcpServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_duration(name: &str) -> anyhow::Result<Option<Duration>> {
    match env::var(name) {
        Ok(value) => {
            let secs: f64 = value
                .parse()
                .map_err(|e| anyhow::anyhow!("{name} must be a number of seconds: {e}"))?;
            Ok(Some(Duration::try_from_secs_f64(secs).map_err(|e| {
                anyhow::anyhow!("{name} must be a non-negative number of seconds: {e}")
            })?))
        }
        Err(_) => Ok(None),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let api_key = env::var("SPOONACULAR_API_KEY").unwrap_or_default();
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let mut builder = SpoonacularClient::builder(api_key);
    if let Ok(base_url) = env::var("SPOONACULAR_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = env_duration("SPOONACULAR_TIMEOUT_SECS")? {
        builder = builder.timeout(timeout);
    }
    if let Some(interval) = env_duration("SPOONACULAR_SLEEP_SECS")? {
        builder = builder.sleep_interval(interval);
    }
    if let Ok(allow) = env::var("SPOONACULAR_ALLOW_EXTRA_CALLS") {
        builder = builder.allow_extra_calls(matches!(
            allow.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ));
    }

    let client = match builder.build() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to create Spoonacular client: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - SPOONACULAR_API_KEY is set and non-empty");
            tracing::error!("  - SPOONACULAR_BASE_URL (if set) is a valid URL");
            std::process::exit(1);
        }
    };

    let config = client.config();
    tracing::info!(
        "Throttling to one request every {:?} (timeout {:?}, extra calls {})",
        config.sleep_interval(),
        config.timeout(),
        if config.allow_extra_calls() { "allowed" } else { "refused" }
    );

    // Create server configuration and start SSE server
    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Spoonacular MCP Server listening on {}", config.bind);

    let sse_server = SseServer::serve_with_config(config).await?;

    // Every session shares the same client, and with it the same throttle and quota view
    let ct = sse_server.with_service(move || SpoonacularMcpServer::new(client.clone()));

    tracing::info!("Spoonacular MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
