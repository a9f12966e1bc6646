// Neighborhood Match - API Server
//
// Usage: neighborhood-server [--data <neighborhoods.json>]
// Environment: PORT, SIMULATE_LATENCY, SIMULATED_LATENCY_MS, RUST_LOG

use anyhow::{bail, Context, Result};
use neighborhood_match::{create_router, AppState, NeighborhoodStore, QueryService, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Optional dataset path from `--data <file>`
fn parse_data_arg<I: IntoIterator<Item = String>>(args: I) -> Result<Option<String>> {
    let mut iter = args.into_iter().skip(1);
    let mut data = None;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data" => match iter.next() {
                Some(path) => data = Some(path),
                None => bail!("--data requires a file path"),
            },
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(data)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neighborhood_match=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let data_file = parse_data_arg(std::env::args())?;

    let store = match &data_file {
        Some(path) => NeighborhoodStore::from_json_file(path)?,
        None => NeighborhoodStore::seeded(),
    };
    tracing::info!(
        records = store.len(),
        source = data_file.as_deref().unwrap_or("seed"),
        "Neighborhood store ready"
    );

    if !config.latency.is_off() {
        tracing::info!(
            list_ms = config.latency.list.as_millis() as u64,
            search_ms = config.latency.search.as_millis() as u64,
            "Simulated latency enabled"
        );
    }

    let state = AppState::new(QueryService::new(Arc::new(store)), config.latency);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running on port {}", config.port);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);
    tracing::info!("Neighborhoods API: http://localhost:{}/api/neighborhoods", config.port);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
