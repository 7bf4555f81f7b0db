use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio::config::Config;
use portfolio::routes::build_router;
use portfolio::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = &config.rust_log;
            EnvFilter::new(format!("portfolio={level},site={level},tower_http={level}"))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    if !config.public_dir.is_dir() {
        tracing::warn!(
            "Public directory {} does not exist; resume PDFs and the wasm bundle will 404",
            config.public_dir.display()
        );
    }
    info!(
        "Serving static assets from {}, images from {}",
        config.public_dir.display(),
        config.asset_base_url
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("invalid listen address")?;

    let app = build_router(AppState::new(config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
