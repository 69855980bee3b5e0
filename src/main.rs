//! HTTP server for the Gratuity Engine.
//!
//! Environment:
//! - `GRATUITY_CONFIG_DIR`: rules directory (default `./config/uae_mohre`)
//! - `GRATUITY_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use gratuity_engine::api::{AppState, create_router};
use gratuity_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_CONFIG_DIR: &str = "./config/uae_mohre";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir = env::var("GRATUITY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("GRATUITY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir).inspect_err(|err| {
        error!(path = %config_dir, error = %err, "Failed to load gratuity rules");
    })?;
    info!(
        code = %config.regulation().code,
        version = %config.regulation().version,
        "Gratuity rules loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Gratuity engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
