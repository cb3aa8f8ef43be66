mod config;
mod constants;
mod error;
mod formatters;
mod geocoding;
mod handlers;
mod http;
mod models;
mod nws;
mod service;
mod sun;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::WeatherConfig;
use crate::service::Weather;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = WeatherConfig::from_env();
    tracing::info!(
        message = "Starting MCP weather server",
        nws_api_base = %config.nws_api_base,
        geocoding_base = %config.geocoding_base
    );

    let weather = Weather::new(&config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
