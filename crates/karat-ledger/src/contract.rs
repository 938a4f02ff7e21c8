//! # Asset Contract
//!
//! Enforces the creation/lookup rules of the registry over the
//! [`WorldState`](crate::store::WorldState) accessor. Assets are stored
//! as JSON documents keyed by their id; the contract models no state
//! machine beyond each key's absent-to-present transition, and exposes
//! no update or delete operation.
//!
//! Every operation takes a [`TransactionContext`] as its first
//! parameter and executes synchronously within that single invocation.

use karat_core::{codec, Asset, CodecError};
use thiserror::Error;

use crate::context::TransactionContext;
use crate::query;
use crate::store::StateError;

/// Error surfaced by a contract operation.
///
/// All variants are terminal for the current invocation; nothing is
/// retried here. Duplicate and not-found variants carry the offending
/// id so callers can report it.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The world state failed a read, write, or query.
    #[error(transparent)]
    Store(#[from] StateError),

    /// A record could not be encoded, or stored bytes could not be
    /// decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Creation was attempted for an id that is already registered.
    #[error("the asset {id} already exists")]
    DuplicateAsset {
        /// The id that collided.
        id: String,
    },

    /// Lookup found no record under the requested id.
    #[error("the asset {id} does not exist")]
    AssetNotFound {
        /// The id that was requested.
        id: String,
    },
}

/// The asset registry contract.
///
/// A plain struct — the world state is injected per invocation through
/// the [`TransactionContext`], never embedded.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetRegistry;

impl AssetRegistry {
    /// Create the contract.
    pub fn new() -> Self {
        Self
    }

    /// The fixed starter set written by [`init_ledger`](Self::init_ledger).
    fn seed_assets() -> [Asset; 6] {
        [
            Asset::new("asset1", "blue", 5, "Tomoko", 300),
            Asset::new("asset2", "red", 5, "Brad", 400),
            Asset::new("asset3", "green", 10, "Jin Soo", 500),
            Asset::new("asset4", "yellow", 10, "Max", 600),
            Asset::new("asset5", "black", 15, "Adriana", 700),
            Asset::new("asset6", "white", 15, "Michel", 800),
        ]
    }

    /// Seed the ledger with the six starter assets.
    ///
    /// One-time bootstrap: there is no existence check, so re-invocation
    /// overwrites the seed keys with their starter values. Aborts on the
    /// first encode or write failure, leaving later seeds unwritten.
    pub fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), ContractError> {
        for asset in Self::seed_assets() {
            let bytes = codec::encode(&asset)?;
            ctx.stub().put(&asset.id, &bytes)?;
        }
        tracing::debug!("ledger seeded with starter assets");
        Ok(())
    }

    /// Whether a record is stored under `id`.
    ///
    /// A single store read: absent keys (and empty stored values) are
    /// `false`, not an error. Only a failure of the read itself errors.
    pub fn asset_exists(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
    ) -> Result<bool, ContractError> {
        let value = ctx.stub().get(id)?;
        Ok(matches!(value, Some(bytes) if !bytes.is_empty()))
    }

    /// Register a new asset under `id`.
    ///
    /// Fails with [`ContractError::DuplicateAsset`] if the id is taken.
    /// If encoding fails, no write is attempted.
    pub fn create_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), ContractError> {
        tracing::debug!(%id, %color, size, %owner, appraised_value, "creating asset");

        if self.asset_exists(ctx, id)? {
            return Err(ContractError::DuplicateAsset { id: id.to_string() });
        }

        let asset = Asset::new(id, color, size, owner, appraised_value);
        let bytes = codec::encode(&asset)?;
        ctx.stub().put(id, &bytes)?;
        Ok(())
    }

    /// Fetch the asset stored under `id`.
    pub fn read_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
    ) -> Result<Asset, ContractError> {
        tracing::debug!(%id, "reading asset");

        match ctx.stub().get(id)? {
            Some(bytes) if !bytes.is_empty() => Ok(codec::decode(&bytes)?),
            _ => Err(ContractError::AssetNotFound { id: id.to_string() }),
        }
    }

    /// Run a rich query expression and aggregate the matching assets.
    ///
    /// The expression is passed to the store verbatim; a rejected
    /// expression surfaces as a store query error. Aggregation is
    /// strict: one undecodable match fails the whole call.
    pub fn query_assets(
        &self,
        ctx: &TransactionContext<'_>,
        expression: &str,
    ) -> Result<Vec<Asset>, ContractError> {
        tracing::debug!(expression, "running rich query");

        let cursor = ctx.stub().rich_query(expression)?;
        query::drain(cursor)
    }

    /// Fetch every asset with the given color.
    ///
    /// The selector is built structurally, so a color containing quotes
    /// or backslashes cannot break or inject query syntax.
    pub fn get_assets_by_color(
        &self,
        ctx: &TransactionContext<'_>,
        color: &str,
    ) -> Result<Vec<Asset>, ContractError> {
        let expression = serde_json::json!({ "selector": { "Color": color } }).to_string();
        self.query_assets(ctx, &expression)
    }

    /// Fetch every asset in the world state.
    ///
    /// Unbounded range scan; result order is whatever the store's scan
    /// delivers and callers must not depend on it.
    pub fn get_all_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<Asset>, ContractError> {
        let cursor = ctx.stub().range_scan("", "")?;
        query::drain(cursor)
    }
}
