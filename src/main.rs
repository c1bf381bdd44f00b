//! Storefront backend binary
//!
//! Loads configuration, installs logging and serves the cart and order routes.

use anyhow::Result;
use cart_api::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let module = StorefrontModule::new();
    tracing::info!(
        name = module.name(),
        version = module.version(),
        "starting storefront backend"
    );

    ServerBuilder::new()
        .with_config(config)
        .register_module(module)
        .serve()
        .await
}
