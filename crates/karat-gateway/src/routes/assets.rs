//! # Asset API
//!
//! Forwards asset registry operations to the ledger contract:
//! creation, lookup, full listing, color filtering, and rich queries.
//!
//! Routes:
//! - POST /api/assets — Register a new asset
//! - GET  /api/assets — List every registered asset
//! - GET  /api/assets/:id — Fetch one asset
//! - GET  /api/assets/color/:color — Fetch assets by color
//! - POST /api/assets/query — Run a selector query

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use karat_core::Asset;
use karat_ledger::TransactionContext;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_json, extract_validated_json, Validate};
use crate::state::AppState;

/// Request to register a new asset.
///
/// Field names match the asset's wire encoding; every field is
/// required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssetRequest {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Size")]
    pub size: i64,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "AppraisedValue")]
    pub appraised_value: i64,
}

impl Validate for CreateAssetRequest {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("ID must not be empty".to_string());
        }
        Ok(())
    }
}

/// Selector query request.
///
/// The selector holds field-equality predicates in the store's
/// rich-query dialect. It is re-serialized structurally before reaching
/// the ledger, never spliced into a query string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryAssetsRequest {
    #[schema(value_type = Object)]
    pub selector: serde_json::Map<String, serde_json::Value>,
}

/// Build the assets router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/assets", post(create_asset).get(list_assets))
        .route("/api/assets/query", post(query_assets))
        .route("/api/assets/color/:color", get(assets_by_color))
        .route("/api/assets/:id", get(read_asset))
}

/// POST /api/assets — Register a new asset.
#[utoipa::path(
    post,
    path = "/api/assets",
    request_body = CreateAssetRequest,
    responses(
        (status = 201, description = "Asset registered", body = Asset),
        (status = 409, description = "Asset id already registered", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody),
    ),
    tag = "assets"
)]
pub async fn create_asset(
    State(state): State<AppState>,
    body: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Asset>), AppError> {
    let req = extract_validated_json(body)?;

    let ctx = TransactionContext::new(&state.world);
    state.registry.create_asset(
        &ctx,
        &req.id,
        &req.color,
        req.size,
        &req.owner,
        req.appraised_value,
    )?;

    let asset = Asset::new(req.id, req.color, req.size, req.owner, req.appraised_value);
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/assets/:id — Fetch one asset.
#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset found", body = Asset),
        (status = 404, description = "No asset under that id", body = ErrorBody),
    ),
    tag = "assets"
)]
pub async fn read_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Asset>, AppError> {
    let ctx = TransactionContext::new(&state.world);
    let asset = state.registry.read_asset(&ctx, &id)?;
    Ok(Json(asset))
}

/// GET /api/assets — List every registered asset.
///
/// Result order follows the store's range scan and is not part of the
/// API contract.
#[utoipa::path(
    get,
    path = "/api/assets",
    responses(
        (status = 200, description = "All registered assets", body = [Asset]),
    ),
    tag = "assets"
)]
pub async fn list_assets(State(state): State<AppState>) -> Result<Json<Vec<Asset>>, AppError> {
    let ctx = TransactionContext::new(&state.world);
    let assets = state.registry.get_all_assets(&ctx)?;
    Ok(Json(assets))
}

/// GET /api/assets/color/:color — Fetch assets by color.
#[utoipa::path(
    get,
    path = "/api/assets/color/{color}",
    params(("color" = String, Path, description = "Color to match")),
    responses(
        (status = 200, description = "Assets with the given color", body = [Asset]),
    ),
    tag = "assets"
)]
pub async fn assets_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let ctx = TransactionContext::new(&state.world);
    let assets = state.registry.get_assets_by_color(&ctx, &color)?;
    Ok(Json(assets))
}

/// POST /api/assets/query — Run a selector query.
#[utoipa::path(
    post,
    path = "/api/assets/query",
    request_body = QueryAssetsRequest,
    responses(
        (status = 200, description = "Matching assets", body = [Asset]),
        (status = 422, description = "Selector rejected by the store", body = ErrorBody),
    ),
    tag = "assets"
)]
pub async fn query_assets(
    State(state): State<AppState>,
    body: Result<Json<QueryAssetsRequest>, JsonRejection>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let req = extract_json(body)?;

    let expression = serde_json::json!({ "selector": req.selector }).to_string();
    let ctx = TransactionContext::new(&state.world);
    let assets = state.registry.query_assets(&ctx, &expression)?;
    Ok(Json(assets))
}
