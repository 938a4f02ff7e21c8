//! # karat-gateway — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Karat asset registry gateway.
//! Binds to a configurable port (default 8080).

use karat_gateway::{AppConfig, AppState};
use karat_ledger::TransactionContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let seed_ledger = std::env::var("SEED_LEDGER")
        .map(|v| {
            let v = v.to_lowercase();
            v == "true" || v == "1"
        })
        .unwrap_or(false);

    let config = AppConfig { port, seed_ledger };
    let state = AppState::with_config(config);

    // Bootstrap seeding, when requested. Re-runs overwrite the seed
    // keys with their starter values.
    if state.config.seed_ledger {
        let ctx = TransactionContext::new(&state.world);
        state.registry.init_ledger(&ctx).map_err(|e| {
            tracing::error!("ledger seeding failed: {e}");
            e
        })?;
        tracing::info!("ledger seeded with starter assets");
    }

    let app = karat_gateway::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Karat gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
