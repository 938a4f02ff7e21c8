//! # karat-core — Asset Registry Domain Model
//!
//! Foundational types for the Karat asset registry: the [`Asset`] record
//! stored in the ledger's world state, and the codec that maps it to and
//! from its JSON byte encoding.
//!
//! ## Crate Policy
//!
//! - No I/O and no storage access — this crate only defines the record
//!   shape and its byte encoding.
//! - The wire field names (`ID`, `Color`, `Size`, `Owner`,
//!   `AppraisedValue`) are a compatibility contract with existing ledger
//!   state and must not change.

pub mod asset;
pub mod codec;

pub use asset::Asset;
pub use codec::{decode, encode, CodecError};
