//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the gateway's API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Karat Gateway — Asset Registry API",
        version = "0.1.0",
        description = "HTTP gateway for the Karat asset registry. Forwards asset creation, lookup, and query operations to the ledger contract.\n\nHealth probes (`/health/*`) are unauthenticated.",
        license(name = "Apache-2.0")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // ── Assets ──────────────────────────────────────────────────────
        crate::routes::assets::create_asset,
        crate::routes::assets::read_asset,
        crate::routes::assets::list_assets,
        crate::routes::assets::assets_by_color,
        crate::routes::assets::query_assets,
        // ── Ledger bootstrap ────────────────────────────────────────────
        crate::routes::ledger::init_ledger,
    ),
    components(
        schemas(
            karat_core::Asset,
            crate::routes::assets::CreateAssetRequest,
            crate::routes::assets::QueryAssetsRequest,
            crate::routes::ledger::InitLedgerResponse,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        ),
    ),
    tags(
        (name = "assets", description = "Asset registration, lookup, and queries"),
        (name = "ledger", description = "Ledger bootstrap seeding"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
