//! post-relay
//!
//! Fetches posts and comments from an upstream JSON API and re-exposes them,
//! optionally merged and filtered, as its own REST API.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────┐
//!                     │                  POST RELAY                   │
//!                     │                                               │
//!   Client Request    │  ┌──────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────────┼─▶│ security │──▶│   http   │──▶│ upstream  │──┼──▶ Upstream
//!                     │  │  (auth)  │   │ handlers │   │  client   │  │    API
//!                     │  └──────────┘   └────┬─────┘   └───────────┘  │
//!                     │                      │                        │
//!                     │                      ▼                        │
//!   Client Response   │               ┌────────────┐                  │
//!   ◀─────────────────┼───────────────│   posts    │                  │
//!                     │               │merge/filter│                  │
//!                     │               └────────────┘                  │
//!                     │                                               │
//!                     │  config · observability · lifecycle           │
//!                     └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use post_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use post_relay::lifecycle::startup;
use post_relay::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "post-relay")]
#[command(about = "REST relay for an upstream posts/comments API", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(long)]
    bind_address: Option<String>,

    /// Override `upstream.base_url`.
    #[arg(long)]
    upstream_url: Option<String>,
}

fn resolve_config(cli: Cli) -> Result<RelayConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    if let Some(addr) = cli.bind_address {
        config.listener.bind_address = addr;
    }
    if let Some(url) = cli.upstream_url {
        config.upstream.base_url = url;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(Cli::parse())?;

    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        auth_enabled = config.security.enabled,
        metrics_enabled = config.observability.metrics_enabled,
        "post-relay starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
