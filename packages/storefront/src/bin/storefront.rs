//! NFT Drop Storefront binary.

use std::sync::Arc;
use storefront::{create_router, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NFT Drop Storefront");

    let config: Config = config::Config::builder()
        .add_source(config::File::with_name("storefront").required(false))
        .add_source(config::Environment::with_prefix("STOREFRONT"))
        .build()?
        .try_deserialize()
        .unwrap_or_default();

    info!(
        dataset = %config.cms_dataset,
        rpc = %config.rpc_url,
        "Configuration loaded"
    );

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config)?);

    let app = create_router(state);

    info!(address = %bind_address, "Listening");

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
