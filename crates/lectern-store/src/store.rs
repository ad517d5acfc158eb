//! Snapshot-producing store.

use std::sync::Arc;

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::RootState;

/// Single authoritative state container for the main process.
///
/// Owned by the main event loop and passed explicitly to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RootState>,
    /// Number of actions applied since creation.
    revision: u64,
}

impl Store {
    /// Create a store seeded with `initial`.
    pub fn new(initial: RootState) -> Self {
        Self {
            state: Arc::new(initial),
            revision: 0,
        }
    }

    /// Get the current immutable snapshot.
    pub fn state(&self) -> Arc<RootState> {
        Arc::clone(&self.state)
    }

    /// Number of actions dispatched so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an action and return the new snapshot.
    pub fn dispatch(&mut self, action: &Action) -> Arc<RootState> {
        tracing::debug!(action = action.type_name(), "dispatch");
        self.state = Arc::new(reduce(&self.state, action));
        self.revision += 1;
        self.state()
    }
}
