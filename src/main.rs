//! HTTP server for the net salary engine.
//!
//! Reads its configuration from the YAML file named by `NOMINA_CONFIG`
//! (defaults apply when unset) and serves the calculation API.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nomina_engine::ENGINE_VERSION;
use nomina_engine::api::{AppState, create_router};
use nomina_engine::config::ConfigLoader;

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loader = ConfigLoader::from_env().context("failed to load configuration")?;
    init_logging(&loader.config().logging.filter);

    let address = loader.config().bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(%address, version = ENGINE_VERSION, "Server starting");

    let router = create_router(AppState::new(loader));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        // keep serving; the process can still be killed
        std::future::pending::<()>().await;
    }
}
