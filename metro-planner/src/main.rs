use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_planner::loader::load_from_path;
use metro_planner::planner::RouteCalculator;
use metro_planner::web::{AppState, create_router};

/// Network map used when `METRO_MAP` is not set.
const DEFAULT_MAP_PATH: &str = "data/metro.json";

/// Listen address used when `METRO_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let map_path = std::env::var("METRO_MAP").unwrap_or_else(|_| DEFAULT_MAP_PATH.to_string());
    let addr: SocketAddr = std::env::var("METRO_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    // Fail fast on a broken map
    let index = load_from_path(&map_path)?;
    let calculator = RouteCalculator::new(index);

    let state = AppState::new(calculator);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Metro Route Planner listening");
    info!("  GET  /health  - Health check");
    info!("  GET  /lines   - Lines and their stations");
    info!("  GET  /route   - Shortest route (from, to, from_line, to_line)");

    axum::serve(listener, app).await?;
    Ok(())
}
