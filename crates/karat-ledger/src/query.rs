//! # Query Aggregation
//!
//! Drains a world-state cursor into a list of decoded assets. The loop
//! is strict: the first malformed entry aborts the whole aggregation
//! with no partial result, and cursor release is guaranteed by drop on
//! every exit path.

use karat_core::{codec, Asset};

use crate::contract::ContractError;
use crate::store::StateCursor;

/// Decode every value the cursor delivers, preserving delivery order.
///
/// An exhausted-from-the-start cursor yields `Ok(vec![])`, not an
/// error. A pull failure or an undecodable value propagates
/// immediately; the partially built list is discarded.
pub fn drain(mut cursor: Box<dyn StateCursor>) -> Result<Vec<Asset>, ContractError> {
    let mut assets = Vec::new();
    while let Some(pair) = cursor.next()? {
        assets.push(codec::decode(&pair.value)?);
    }
    Ok(assets)
}
