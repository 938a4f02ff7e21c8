//! # World State Accessor
//!
//! Defines the [`WorldState`] trait, the key-value interface the asset
//! contract runs against. The host ledger runtime supplies the real
//! implementation; [`MemoryState`](crate::memory::MemoryState) is the
//! in-process one.
//!
//! ## Cursor Lifecycle
//!
//! Range scans and rich queries return a [`StateCursor`]: an owned,
//! single-use iterator handle over `(key, value)` pairs. A cursor is
//! acquired at query start and released when dropped; implementations
//! free any backend resources in `Drop`, so release happens on every
//! path, including early failure during aggregation. A cursor must not
//! be reused after it reports exhaustion.

use thiserror::Error;

/// A single key-value pair delivered by a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// The world-state key.
    pub key: String,
    /// The stored bytes under that key.
    pub value: Vec<u8>,
}

/// Error surfaced by world-state operations.
///
/// "Key absent" is not an error; [`WorldState::get`] reports it as
/// `Ok(None)`. These variants cover failures of the store itself.
#[derive(Error, Debug)]
pub enum StateError {
    /// The underlying read failed.
    #[error("failed to read from world state: {0}")]
    Read(String),

    /// The underlying write failed.
    #[error("failed to write to world state: {0}")]
    Write(String),

    /// The store rejected a query expression (malformed selector,
    /// unsupported predicate, or missing query capability).
    #[error("world state rejected query: {0}")]
    Query(String),
}

/// Single-use iterator handle over query or range-scan results.
///
/// Delivery order is whatever the backend produces; callers must not
/// depend on it. Dropping the cursor releases it.
pub trait StateCursor: Send + std::fmt::Debug {
    /// Pull the next pair, or `Ok(None)` once the cursor is exhausted.
    fn next(&mut self) -> Result<Option<KeyValue>, StateError>;
}

/// Key-value world state consumed by the asset contract.
///
/// Implementations must provide linearizable reads and writes within a
/// single contract invocation and single-key write atomicity: a `put`
/// either fully replaces the prior value or does not occur.
pub trait WorldState: Send + Sync {
    /// Read the bytes stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Store `value` under `key`, replacing any prior value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StateError>;

    /// Open a cursor over keys in `[start_key, end_key)`.
    ///
    /// An empty `start_key` or `end_key` leaves that side unbounded;
    /// both empty scans the entire key space.
    fn range_scan(&self, start_key: &str, end_key: &str)
        -> Result<Box<dyn StateCursor>, StateError>;

    /// Execute a rich query expression and open a cursor over the
    /// matching entries.
    ///
    /// The expression dialect is a contract between the caller and the
    /// backend; this trait treats it as an opaque string.
    fn rich_query(&self, expression: &str) -> Result<Box<dyn StateCursor>, StateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_operation() {
        assert!(StateError::Read("io".into())
            .to_string()
            .contains("read from world state"));
        assert!(StateError::Write("io".into())
            .to_string()
            .contains("write to world state"));
        assert!(StateError::Query("bad selector".into())
            .to_string()
            .contains("rejected query"));
    }
}
