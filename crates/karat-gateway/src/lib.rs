//! # karat-gateway — HTTP Gateway for the Asset Registry
//!
//! The HTTP-facing half of the Karat asset registry. Translates JSON
//! request bodies to contract arguments, invokes the asset contract,
//! and marshals results (or structured errors) back as JSON responses.
//!
//! ## API Surface
//!
//! | Route                          | Operation                     |
//! |--------------------------------|-------------------------------|
//! | `POST /api/assets`             | Register an asset             |
//! | `GET  /api/assets`             | List every asset              |
//! | `GET  /api/assets/:id`         | Fetch one asset               |
//! | `GET  /api/assets/color/:color`| Fetch assets by color         |
//! | `POST /api/assets/query`       | Run a selector query          |
//! | `POST /api/ledger/init`        | Seed the starter assets       |
//! | `GET  /health/liveness`        | Liveness probe                |
//! | `GET  /health/readiness`       | Readiness probe               |
//! | `GET  /openapi.json`           | OpenAPI specification         |
//!
//! ## Crate Policy
//!
//! - No contract logic in route handlers — every rule lives in
//!   `karat-ledger`; handlers only extract, delegate, and map errors.
//! - All errors map to structured HTTP responses via
//!   [`AppError`](error::AppError).

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use karat_ledger::WorldState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// CORS is permissive, matching the upstream deployment's open policy.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::assets::router())
        .merge(routes::ledger::router())
        .merge(openapi::router());

    Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .merge(api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe — always returns 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the world state answers reads.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.world.get("__readiness__") {
        Ok(_) => (StatusCode::OK, "ready").into_response(),
        Err(e) => {
            tracing::warn!("world state health check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "world state unreachable").into_response()
        }
    }
}
