use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs;
use crate::schemas::WorkflowState;

use super::{next_version, WorkflowStateStore};

/// Store keeping one JSON file per record under `<root>/.tablo/progress`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonFileStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkflowStateStore for JsonFileStore {
    fn get(&self, user_id: u64, gallery_id: u64) -> Result<Option<WorkflowState>> {
        fs::read_state(&self.root, user_id, gallery_id)
    }

    fn save(&mut self, state: &WorkflowState) -> Result<WorkflowState> {
        let stored = fs::read_state(&self.root, state.user_id, state.gallery_id)?;
        let version = next_version(stored.as_ref(), state)?;
        let mut saved = state.clone();
        saved.version = version;
        fs::write_state(&self.root, &saved)?;
        Ok(saved)
    }
}
