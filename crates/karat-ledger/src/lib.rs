//! # karat-ledger — Asset Contract over a Key-Value World State
//!
//! The ledger-side half of the Karat asset registry. Assets are stored as
//! JSON documents in a key-value world state, keyed by asset id. This
//! crate owns the rules governing how records are created, looked up, and
//! queried; it never implements storage itself.
//!
//! ## Components
//!
//! - **[`store`]** — the [`WorldState`] accessor trait consumed by the
//!   contract (`get`/`put`/range scan/rich query) and the cursor handle
//!   over scan results. Provided by the host ledger runtime in
//!   production.
//! - **[`memory`]** — [`MemoryState`], an in-memory `WorldState` backend
//!   used by the gateway's embedded mode and by tests.
//! - **[`context`]** — [`TransactionContext`], the per-invocation handle
//!   through which every contract operation reaches the world state.
//! - **[`contract`]** — [`AssetRegistry`], the contract operations:
//!   seeding, existence checks, creation, lookup, and queries.
//! - **[`query`]** — the aggregation step that drains a cursor into a
//!   decoded asset list.
//!
//! ## Design
//!
//! Contract operations are synchronous: each executes within a single
//! logical transaction invocation and observes a consistent snapshot of
//! the world state for its duration. Ordering and conflict resolution
//! across concurrent invocations belong to the host runtime, not to this
//! crate. There is no caching, retry, or backoff; every store failure
//! surfaces immediately to the caller.

pub mod context;
pub mod contract;
pub mod memory;
pub mod query;
pub mod store;

pub use context::TransactionContext;
pub use contract::{AssetRegistry, ContractError};
pub use memory::MemoryState;
pub use store::{KeyValue, StateCursor, StateError, WorldState};
