//! parcel-rates server binary.
//!
//! Loads settings, installs tracing and serves the REST API until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use parcel_rates::api::rest::{AppState, create_router};
use parcel_rates::config::Settings;
use parcel_rates::infrastructure::carriers::EasyPostProvider;
use parcel_rates::infrastructure::persistence::in_memory::InMemoryShipmentRepository;
use parcel_rates::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Parcel shipping rate comparison service.
#[derive(Debug, Parser)]
#[command(name = "parcel-rates", version, about)]
struct Cli {
    /// Configuration file layered over `config/default.toml`.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;
    telemetry::init(&settings.logging).context("initializing tracing")?;

    if settings.provider.api_key.is_none() {
        warn!("no provider API key configured; live rate requests will fail");
    }

    let provider = EasyPostProvider::new(
        settings.provider.base_url.clone(),
        settings.provider.api_key.clone(),
        settings.provider.timeout_ms,
    )
    .context("building provider client")?;
    let repository = InMemoryShipmentRepository::with_capacity(settings.rates.cache_capacity);

    let state = Arc::new(AppState::new(
        Arc::new(provider),
        Arc::new(repository),
        settings.rates.fallback,
        settings.rates.default_strategy,
    ));
    let app = create_router(state);

    let addr = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(
        %addr,
        fallback = %settings.rates.fallback,
        strategy = %settings.rates.default_strategy,
        "parcel-rates listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
