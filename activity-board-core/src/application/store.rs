use crate::domain::{derive_view, ActivityView, FilterCriteria, Snapshot};

/// Owns the last fetched snapshot. Starts empty, replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityStore {
    snapshot: Snapshot,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched snapshot
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn derive(&self, criteria: &FilterCriteria) -> ActivityView {
        derive_view(&self.snapshot, criteria)
    }
}
