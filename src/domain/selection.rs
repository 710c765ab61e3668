//! Selection operations
//!
//! Pure functions that apply a guest's photo selection to a workflow state.
//! None of them mutate their input; each returns the updated state and, where
//! a downstream selection can be invalidated, a cascade report.

use std::collections::BTreeSet;

use crate::errors::{Result, TabloError};
use crate::schemas::{MediaId, WorkflowState};

use super::cascade::{partition_allowed, reconcile_tablo, CascadeReport};
use super::validation::ensure_editable;

/// Replace the claimed set, cascading into retouch and tablo.
pub fn save_claiming_selection(
    state: &WorkflowState,
    photo_ids: &[MediaId],
) -> Result<(WorkflowState, CascadeReport)> {
    ensure_editable(state)?;

    let mut data = state.steps_data.clone();
    data.claimed_media_ids = photo_ids.iter().copied().collect();

    let (kept, removed) = partition_allowed(&data.retouch_media_ids, &data.claimed_media_ids);
    data.retouch_media_ids = kept;

    let mut report = CascadeReport {
        removed_retouch_ids: removed,
        ..Default::default()
    };
    report.cleared_tablo_id = reconcile_tablo(&mut data);

    if report.has_changes() {
        tracing::debug!(
            user_id = state.user_id,
            gallery_id = state.gallery_id,
            removed_retouch = ?report.removed_retouch_ids,
            cleared_tablo = ?report.cleared_tablo_id,
            "claiming change cascaded"
        );
    }

    Ok((state.clone().with_steps_data(data), report))
}

/// Replace the retouch set with the claimed subset of `photo_ids`.
///
/// Ids that were never claimed are dropped with a warning rather than
/// rejecting the whole request.
pub fn save_retouch_selection(
    state: &WorkflowState,
    photo_ids: &[MediaId],
    max_retouch: Option<usize>,
) -> Result<(WorkflowState, CascadeReport)> {
    ensure_editable(state)?;

    let requested: BTreeSet<MediaId> = photo_ids.iter().copied().collect();
    let (valid, dropped) = partition_allowed(&requested, &state.steps_data.claimed_media_ids);

    if !dropped.is_empty() {
        tracing::warn!(
            user_id = state.user_id,
            gallery_id = state.gallery_id,
            dropped = ?dropped,
            "ignoring retouch ids that are not claimed"
        );
    }

    if let Some(max) = max_retouch {
        if valid.len() > max {
            return Err(TabloError::Validation(format!(
                "Legfeljebb {} képet választhatsz ki retusálásra.",
                max
            )));
        }
    }

    let mut data = state.steps_data.clone();
    data.retouch_media_ids = valid;

    let mut report = CascadeReport {
        dropped_retouch_ids: dropped,
        ..Default::default()
    };
    report.cleared_tablo_id = reconcile_tablo(&mut data);

    Ok((state.clone().with_steps_data(data), report))
}

/// Pick the tablo portrait.
pub fn save_tablo_photo(state: &WorkflowState, photo_id: MediaId) -> Result<WorkflowState> {
    ensure_editable(state)?;

    let data = &state.steps_data;
    if !data.tablo_candidates().contains(&photo_id) {
        let message = if data.retouch_media_ids.is_empty() {
            "A tablókép csak a saját képeid közül lehet."
        } else {
            "A tablókép csak a retusálásra kiválasztott képek közül lehet."
        };
        return Err(TabloError::Validation(message.to_string()));
    }

    let mut data = data.clone();
    data.tablo_media_id = Some(photo_id);
    Ok(state.clone().with_steps_data(data))
}

/// Remove the tablo pick. Clearing an empty pick is a no-op.
pub fn clear_tablo_photo(state: &WorkflowState) -> Result<WorkflowState> {
    ensure_editable(state)?;

    let mut data = state.steps_data.clone();
    data.tablo_media_id = None;
    Ok(state.clone().with_steps_data(data))
}
