use std::collections::HashMap;

use crate::errors::Result;
use crate::schemas::WorkflowState;

use super::{next_version, WorkflowStateStore};

/// Store keeping records in a map; used by tests and embedders.
#[derive(Debug, Default)]
pub struct InMemoryWorkflowStore {
    inner: HashMap<(u64, u64), WorkflowState>,
}

impl InMemoryWorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl WorkflowStateStore for InMemoryWorkflowStore {
    fn get(&self, user_id: u64, gallery_id: u64) -> Result<Option<WorkflowState>> {
        Ok(self.inner.get(&(user_id, gallery_id)).cloned())
    }

    fn save(&mut self, state: &WorkflowState) -> Result<WorkflowState> {
        let key = (state.user_id, state.gallery_id);
        let version = next_version(self.inner.get(&key), state)?;
        let mut saved = state.clone();
        saved.version = version;
        self.inner.insert(key, saved.clone());
        Ok(saved)
    }
}
