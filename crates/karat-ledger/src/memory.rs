//! # In-Memory World State
//!
//! [`MemoryState`] backs the contract with an ordered in-process map.
//! It serves the gateway's embedded mode and tests; durability and
//! replication are the host ledger's job, not this backend's.
//!
//! Rich queries implement the selector dialect the contract emits:
//! a JSON object with a `selector` member holding field-equality
//! predicates, evaluated against the stored JSON documents.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::{KeyValue, StateCursor, StateError, WorldState};

/// In-memory world state over an ordered map.
///
/// Cheaply cloneable; all clones share the same underlying data. All
/// operations are synchronous and the lock is never held beyond a
/// single call.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryState {
    /// Create an empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

/// Cursor over a snapshot of matching entries.
///
/// The snapshot is taken when the cursor is opened, so aggregation
/// observes a consistent view even if the map changes afterwards.
/// Dropping the cursor releases the snapshot.
#[derive(Debug)]
struct SnapshotCursor {
    entries: std::vec::IntoIter<KeyValue>,
}

impl StateCursor for SnapshotCursor {
    fn next(&mut self) -> Result<Option<KeyValue>, StateError> {
        Ok(self.entries.next())
    }
}

impl WorldState for MemoryState {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn range_scan(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateCursor>, StateError> {
        let start = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key.to_string())
        };
        // End key is exclusive, matching conventional range-scan bounds.
        let end = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key.to_string())
        };

        let entries: Vec<KeyValue> = self
            .data
            .read()
            .range((start, end))
            .map(|(key, value)| KeyValue {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(SnapshotCursor {
            entries: entries.into_iter(),
        }))
    }

    fn rich_query(&self, expression: &str) -> Result<Box<dyn StateCursor>, StateError> {
        let predicates = parse_selector(expression)?;

        let entries: Vec<KeyValue> = self
            .data
            .read()
            .iter()
            .filter(|(_, value)| document_matches(value, &predicates))
            .map(|(key, value)| KeyValue {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(SnapshotCursor {
            entries: entries.into_iter(),
        }))
    }
}

/// Parse a selector expression into its field-equality predicates.
///
/// The expression must be a JSON object with a `selector` member. Each
/// selector member maps a field name to the scalar it must equal;
/// operator objects and array predicates are not supported by this
/// backend and are rejected as a query error.
fn parse_selector(expression: &str) -> Result<Vec<(String, serde_json::Value)>, StateError> {
    let expr: serde_json::Value = serde_json::from_str(expression)
        .map_err(|e| StateError::Query(format!("malformed expression: {e}")))?;

    let selector = expr
        .get("selector")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| {
            StateError::Query("expression must be an object with a selector member".to_string())
        })?;

    let mut predicates = Vec::with_capacity(selector.len());
    for (field, expected) in selector {
        if expected.is_object() || expected.is_array() {
            return Err(StateError::Query(format!(
                "unsupported predicate for field {field}: only equality is supported"
            )));
        }
        predicates.push((field.clone(), expected.clone()));
    }
    Ok(predicates)
}

/// Whether a stored value is a JSON document satisfying every predicate.
///
/// Values that are not JSON objects can never match a selector and are
/// filtered out rather than reported as errors, mirroring how a
/// document-database index would simply not contain them.
fn document_matches(value: &[u8], predicates: &[(String, serde_json::Value)]) -> bool {
    let Ok(doc) = serde_json::from_slice::<serde_json::Value>(value) else {
        return false;
    };
    let Some(fields) = doc.as_object() else {
        return false;
    };
    predicates
        .iter()
        .all(|(field, expected)| fields.get(field) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryState {
        let state = MemoryState::new();
        state
            .put("a1", br#"{"Color":"blue","Size":5}"#)
            .unwrap();
        state
            .put("a2", br#"{"Color":"red","Size":5}"#)
            .unwrap();
        state
            .put("a3", br#"{"Color":"red","Size":10}"#)
            .unwrap();
        state
    }

    fn drain_keys(mut cursor: Box<dyn StateCursor>) -> Vec<String> {
        let mut keys = Vec::new();
        while let Some(pair) = cursor.next().unwrap() {
            keys.push(pair.key);
        }
        keys
    }

    // -- get / put ------------------------------------------------------------

    #[test]
    fn test_get_absent_key_is_none() {
        let state = MemoryState::new();
        assert!(state.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get_returns_bytes() {
        let state = MemoryState::new();
        state.put("k", b"v").unwrap();
        assert_eq!(state.get("k").unwrap().unwrap(), b"v");
    }

    #[test]
    fn test_put_replaces_prior_value() {
        let state = MemoryState::new();
        state.put("k", b"old").unwrap();
        state.put("k", b"new").unwrap();
        assert_eq!(state.get("k").unwrap().unwrap(), b"new");
    }

    #[test]
    fn test_clones_share_data() {
        let state = MemoryState::new();
        let clone = state.clone();
        clone.put("k", b"v").unwrap();
        assert_eq!(state.len(), 1);
        assert!(state.get("k").unwrap().is_some());
    }

    // -- range_scan -----------------------------------------------------------

    #[test]
    fn test_unbounded_scan_delivers_every_key_in_order() {
        let state = seeded();
        let keys = drain_keys(state.range_scan("", "").unwrap());
        assert_eq!(keys, vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn test_scan_end_key_is_exclusive() {
        let state = seeded();
        let keys = drain_keys(state.range_scan("a1", "a3").unwrap());
        assert_eq!(keys, vec!["a1", "a2"]);
    }

    #[test]
    fn test_scan_on_empty_state_is_empty() {
        let state = MemoryState::new();
        let keys = drain_keys(state.range_scan("", "").unwrap());
        assert!(keys.is_empty());
    }

    #[test]
    fn test_scan_snapshot_ignores_later_writes() {
        let state = seeded();
        let cursor = state.range_scan("", "").unwrap();
        state.put("a4", b"{}").unwrap();
        assert_eq!(drain_keys(cursor).len(), 3);
    }

    // -- rich_query -----------------------------------------------------------

    #[test]
    fn test_query_matches_field_equality() {
        let state = seeded();
        let keys = drain_keys(
            state
                .rich_query(r#"{"selector":{"Color":"red"}}"#)
                .unwrap(),
        );
        assert_eq!(keys, vec!["a2", "a3"]);
    }

    #[test]
    fn test_query_conjunction_of_predicates() {
        let state = seeded();
        let keys = drain_keys(
            state
                .rich_query(r#"{"selector":{"Color":"red","Size":10}}"#)
                .unwrap(),
        );
        assert_eq!(keys, vec!["a3"]);
    }

    #[test]
    fn test_query_no_match_is_empty_not_error() {
        let state = seeded();
        let keys = drain_keys(
            state
                .rich_query(r#"{"selector":{"Color":"purple"}}"#)
                .unwrap(),
        );
        assert!(keys.is_empty());
    }

    #[test]
    fn test_query_skips_non_document_values() {
        let state = seeded();
        state.put("junk", b"not json").unwrap();
        let keys = drain_keys(
            state
                .rich_query(r#"{"selector":{"Color":"red"}}"#)
                .unwrap(),
        );
        assert_eq!(keys, vec!["a2", "a3"]);
    }

    #[test]
    fn test_query_rejects_malformed_expression() {
        let state = MemoryState::new();
        let err = state.rich_query("{not json").unwrap_err();
        assert!(matches!(err, StateError::Query(_)));
    }

    #[test]
    fn test_query_rejects_missing_selector() {
        let state = MemoryState::new();
        let err = state.rich_query(r#"{"fields":["Color"]}"#).unwrap_err();
        assert!(matches!(err, StateError::Query(_)));
    }

    #[test]
    fn test_query_rejects_operator_predicates() {
        let state = MemoryState::new();
        let err = state
            .rich_query(r#"{"selector":{"Size":{"$gt":5}}}"#)
            .unwrap_err();
        assert!(matches!(err, StateError::Query(_)));
    }
}
