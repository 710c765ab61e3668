//! Persistence for workflow progress records
//!
//! The engine only sees the [`WorkflowStateStore`] trait. Saves are guarded
//! by the record's `version`: a save based on a stale read fails with
//! `Conflict` instead of silently overwriting another device's change.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::InMemoryWorkflowStore;

use crate::errors::{Result, TabloError};
use crate::schemas::WorkflowState;

/// Repository of per-(user, gallery) progress records.
pub trait WorkflowStateStore {
    /// Load the record, `None` if the user never started this gallery.
    fn get(&self, user_id: u64, gallery_id: u64) -> Result<Option<WorkflowState>>;

    /// Persist `state` and return it with its bumped version.
    ///
    /// Fails with `Conflict` if the stored version differs from `state.version`.
    fn save(&mut self, state: &WorkflowState) -> Result<WorkflowState>;

    /// Load the record or create a fresh one at the claiming step.
    ///
    /// The fresh record is not persisted until the first `save`.
    fn get_or_create(&self, user_id: u64, gallery_id: u64) -> Result<WorkflowState> {
        Ok(self
            .get(user_id, gallery_id)?
            .unwrap_or_else(|| WorkflowState::new(user_id, gallery_id)))
    }
}

/// Compare the caller's version with what is stored and compute the next one.
pub(crate) fn next_version(stored: Option<&WorkflowState>, incoming: &WorkflowState) -> Result<u64> {
    let stored_version = stored.map(|s| s.version).unwrap_or(0);
    if stored_version != incoming.version {
        tracing::warn!(
            user_id = incoming.user_id,
            gallery_id = incoming.gallery_id,
            stored_version,
            incoming_version = incoming.version,
            "rejected stale workflow save"
        );
        return Err(TabloError::Conflict(format!(
            "record for user {} in gallery {} is at version {}, save was based on {}",
            incoming.user_id, incoming.gallery_id, stored_version, incoming.version
        )));
    }
    Ok(stored_version + 1)
}
