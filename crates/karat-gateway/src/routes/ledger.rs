//! # Ledger Bootstrap API
//!
//! One-time seeding of the ledger with the starter asset set.
//!
//! Routes:
//! - POST /api/ledger/init — Seed the ledger

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use karat_ledger::TransactionContext;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// Response to a seeding request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InitLedgerResponse {
    pub message: String,
}

/// Build the ledger router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/ledger/init", post(init_ledger))
}

/// POST /api/ledger/init — Seed the ledger with the starter assets.
///
/// Bootstrap only: re-invocation overwrites the seed keys with their
/// starter values.
#[utoipa::path(
    post,
    path = "/api/ledger/init",
    responses(
        (status = 200, description = "Ledger seeded", body = InitLedgerResponse),
    ),
    tag = "ledger"
)]
pub async fn init_ledger(
    State(state): State<AppState>,
) -> Result<Json<InitLedgerResponse>, AppError> {
    let ctx = TransactionContext::new(&state.world);
    state.registry.init_ledger(&ctx)?;

    tracing::info!("ledger initialized with starter assets");
    Ok(Json(InitLedgerResponse {
        message: "ledger initialized".to_string(),
    }))
}
