//! HTTP server for the wage shortfall engine.
//!
//! Environment:
//! - `WAGE_SHORTFALL_ADDR`: listen address, default `127.0.0.1:3000`.
//! - `WAGE_SHORTFALL_REFERENCE`: path to a reference table YAML file; the
//!   built-in DKI Jakarta table is used when unset.
//! - `RUST_LOG`: log filter, default `info`.

use std::env;
use std::error::Error;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wage_shortfall::api::{AppState, create_router};
use wage_shortfall::config::ConfigLoader;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let loader = match env::var("WAGE_SHORTFALL_REFERENCE") {
        Ok(path) => ConfigLoader::load(path)?,
        Err(_) => ConfigLoader::builtin(),
    };
    info!(
        region = loader.table().region(),
        default_year = loader.table().default_year(),
        "Reference table ready"
    );

    let addr: SocketAddr = env::var("WAGE_SHORTFALL_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let router = create_router(AppState::new(loader.into_table()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
