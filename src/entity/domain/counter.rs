//! Per-state item counter carried by tasks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of sub-items per state plus the expected total,
/// e.g. `{pending: 2, "in progress": 1, done: 3}` out of 6.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    #[serde(default)]
    states: BTreeMap<String, u64>,
    #[serde(default)]
    total: u64,
}

impl Counter {
    /// Creates a counter with no states and the given total.
    #[must_use]
    pub const fn new(total: u64) -> Self {
        Self {
            states: BTreeMap::new(),
            total,
        }
    }

    /// Sets the count for `state`.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>, count: u64) -> Self {
        self.states.insert(state.into(), count);
        self
    }

    /// Returns the per-state counts.
    #[must_use]
    pub const fn states(&self) -> &BTreeMap<String, u64> {
        &self.states
    }

    /// Returns the count for `state`, zero when absent.
    #[must_use]
    pub fn count(&self, state: &str) -> u64 {
        self.states.get(state).copied().unwrap_or_default()
    }

    /// Returns the expected total.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the sum of all per-state counts.
    #[must_use]
    pub fn counted(&self) -> u64 {
        self.states.values().fold(0, |acc, n| acc.saturating_add(*n))
    }
}
