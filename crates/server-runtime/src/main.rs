//! # Vedabyte Server Runtime
//!
//! Entry point for the Vedic duplex squaring service.
//!
//! ## Startup Sequence
//!
//! 1. Install the tracing subscriber (env-filter, `info` default)
//! 2. Load configuration (defaults + environment overrides)
//! 3. Start the API gateway
//! 4. Run until the gateway exits or Ctrl-C arrives
//!
//! ## Environment
//!
//! - `VEDABYTE_HTTP_HOST` — bind address (default 127.0.0.1)
//! - `VEDABYTE_HTTP_PORT` — bind port (default 5000)
//! - `RUST_LOG` — tracing filter (default `info`)

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vedabyte_gateway::{GatewayConfig, GatewayService};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let config = load_config().context("Failed to load configuration")?;

    info!("===========================================");
    info!("  Vedabyte Server v{}", env!("CARGO_PKG_VERSION"));
    info!("  Engine: Vedic duplex squaring");
    info!("===========================================");
    info!("HTTP: {}", config.http_addr());

    let mut service = GatewayService::new(config).context("Failed to create gateway")?;

    tokio::select! {
        result = service.start() => {
            result.context("Gateway exited with error")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Build the gateway configuration from defaults plus environment overrides.
fn load_config() -> Result<GatewayConfig> {
    let mut config = GatewayConfig::default();

    if let Ok(host) = std::env::var("VEDABYTE_HTTP_HOST") {
        config.http.host = host
            .parse()
            .with_context(|| format!("invalid VEDABYTE_HTTP_HOST: {}", host))?;
    }

    if let Ok(port) = std::env::var("VEDABYTE_HTTP_PORT") {
        config.http.port = port
            .parse()
            .with_context(|| format!("invalid VEDABYTE_HTTP_PORT: {}", port))?;
    }

    Ok(config)
}
