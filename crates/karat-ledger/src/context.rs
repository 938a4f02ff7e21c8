//! # Transaction Context
//!
//! The per-invocation capability handle through which contract
//! operations reach the world state. Every [`AssetRegistry`]
//! operation takes a context as its first parameter; the handle is
//! never ambient or global, so each invocation's state access is
//! explicit at every call site.
//!
//! [`AssetRegistry`]: crate::contract::AssetRegistry

use crate::store::WorldState;

/// Handle scoping one contract invocation to one world-state view.
///
/// Borrowed for the duration of the invocation; the host constructs a
/// fresh context per transaction.
pub struct TransactionContext<'a> {
    stub: &'a dyn WorldState,
}

impl<'a> TransactionContext<'a> {
    /// Create a context over the given world state.
    pub fn new(stub: &'a dyn WorldState) -> Self {
        Self { stub }
    }

    /// The world-state accessor for this invocation.
    pub fn stub(&self) -> &dyn WorldState {
        self.stub
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryState;

    #[test]
    fn test_context_exposes_the_wrapped_state() {
        let state = MemoryState::new();
        state.put("k", b"v").unwrap();

        let ctx = TransactionContext::new(&state);
        assert_eq!(ctx.stub().get("k").unwrap().unwrap(), b"v");
    }
}
