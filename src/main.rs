use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wakafix::api;
use wakafix::config::Config;
use wakafix::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Dataset: {} (seed {}, {} per pair)",
        config.dataset,
        config.seed,
        config.workers_per_pair
    );

    let state = AppState::new(config.clone()).context("Failed to build worker directory")?;
    tracing::info!("Loaded {} workers", state.directory.snapshot().len());

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
