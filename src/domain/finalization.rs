//! Finalization guard
//!
//! Locks a finished selection and re-opens it on request. A re-open inside
//! the free edit window costs nothing; afterwards it is a paid modification.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::errors::{InvalidStateReason, Result, TabloError};
use crate::schemas::{WorkflowState, WorkflowStatus, WorkflowStep};

use super::validation::{can_finalize, ensure_editable};

/// Outcome of a modification request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModificationOutcome {
    /// Whether the request fell inside the free edit window
    pub was_free: bool,

    /// Total modifications after this one
    pub modification_count: u32,
}

/// Lock the workflow at the completed step.
pub fn finalize(
    state: &WorkflowState,
    cart_comment: Option<String>,
    now: DateTime<Utc>,
) -> Result<WorkflowState> {
    ensure_editable(state)?;

    let validation = can_finalize(&state.steps_data);
    if let Some(reason) = validation.reason {
        return Err(TabloError::invalid_state(reason));
    }

    let mut next = state.clone().with_step(WorkflowStep::Completed);
    next.workflow_status = WorkflowStatus::Finalized;
    next.finalized_at = Some(now);
    next.cart_comment = cart_comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    tracing::info!(
        user_id = state.user_id,
        gallery_id = state.gallery_id,
        claimed = next.steps_data.claimed_count,
        retouch = next.steps_data.retouch_count,
        "selection finalized"
    );

    Ok(next)
}

/// Whether a modification requested at `now` is inside the free window.
///
/// A finalized record without a timestamp is treated as outside the window.
/// A window reaching past the representable date range never closes.
pub fn is_free_modification(
    state: &WorkflowState,
    free_edit_window_hours: u32,
    now: DateTime<Utc>,
) -> bool {
    let Some(finalized_at) = state.finalized_at else {
        return false;
    };
    match finalized_at.checked_add_signed(Duration::hours(i64::from(free_edit_window_hours))) {
        Some(window_end) => now <= window_end,
        None => true,
    }
}

/// Re-open a finalized workflow at the claiming step, keeping selections.
pub fn request_modification(
    state: &WorkflowState,
    free_edit_window_hours: u32,
    now: DateTime<Utc>,
) -> Result<(WorkflowState, ModificationOutcome)> {
    if !state.is_finalized() {
        return Err(TabloError::invalid_state(InvalidStateReason::NotFinalized));
    }

    let was_free = is_free_modification(state, free_edit_window_hours, now);

    let mut next = state.clone().with_step(WorkflowStep::Claiming);
    if !was_free {
        // Payment is not wired to a gateway yet; the charge always succeeds.
        next.last_modification_paid_at = Some(now);
    }
    next.workflow_status = WorkflowStatus::InProgress;
    next.finalized_at = None;
    next.modification_count = state.modification_count.saturating_add(1);

    tracing::info!(
        user_id = state.user_id,
        gallery_id = state.gallery_id,
        was_free,
        modification_count = next.modification_count,
        "finalized selection reopened"
    );

    let outcome = ModificationOutcome {
        was_free,
        modification_count: next.modification_count,
    };
    Ok((next, outcome))
}
