//! Validation rules for step transitions and finalization

use crate::errors::{InvalidStateReason, Result, TabloError};
use crate::schemas::{WorkflowState, WorkflowStep, WorkflowStepsData};

use super::steps::is_terminal_step;

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<InvalidStateReason>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: InvalidStateReason) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Reject any mutation of a finalized or completed workflow.
pub fn ensure_editable(state: &WorkflowState) -> Result<()> {
    if state.is_finalized() {
        return Err(TabloError::Forbidden(format!(
            "workflow of user {} in gallery {} is finalized",
            state.user_id, state.gallery_id
        )));
    }
    if is_terminal_step(state.current_step) {
        return Err(TabloError::Forbidden(format!(
            "workflow of user {} in gallery {} is completed",
            state.user_id, state.gallery_id
        )));
    }
    Ok(())
}

/// Validate that the selections allow locking the workflow
pub fn can_finalize(data: &WorkflowStepsData) -> ValidationResult {
    if data.claimed_media_ids.is_empty() {
        return ValidationResult::failure(InvalidStateReason::NoClaimedPhotos);
    }
    let tablo = match data.tablo_media_id {
        Some(id) => id,
        None => return ValidationResult::failure(InvalidStateReason::NoTabloPhoto),
    };
    if !data.tablo_candidates().contains(&tablo) {
        let reason = if data.retouch_media_ids.is_empty() {
            InvalidStateReason::TabloNotInClaimed
        } else {
            InvalidStateReason::TabloNotInRetouch
        };
        return ValidationResult::failure(reason);
    }
    ValidationResult::success()
}

/// Validate entering `target` by navigation
pub fn can_enter_step(target: WorkflowStep, data: &WorkflowStepsData) -> ValidationResult {
    match target {
        WorkflowStep::Claiming => ValidationResult::success(),
        WorkflowStep::Completed => ValidationResult::failure(InvalidStateReason::FinalizeRequired),
        WorkflowStep::Registration | WorkflowStep::Retouch | WorkflowStep::Tablo => {
            if data.claimed_media_ids.is_empty() {
                return ValidationResult::failure(InvalidStateReason::NoClaimedPhotos);
            }
            ValidationResult::success()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{MediaId, WorkflowStatus};
    use std::collections::BTreeSet;

    fn data(claimed: &[MediaId], retouch: &[MediaId], tablo: Option<MediaId>) -> WorkflowStepsData {
        WorkflowStepsData {
            claimed_media_ids: claimed.iter().copied().collect::<BTreeSet<_>>(),
            retouch_media_ids: retouch.iter().copied().collect::<BTreeSet<_>>(),
            tablo_media_id: tablo,
            ..Default::default()
        }
    }

    #[test]
    fn test_ensure_editable_in_progress() {
        let state = WorkflowState::new(1, 1);
        assert!(ensure_editable(&state).is_ok());
    }

    #[test]
    fn test_ensure_editable_rejects_finalized() {
        let mut state = WorkflowState::new(1, 1);
        state.workflow_status = WorkflowStatus::Finalized;
        assert!(matches!(ensure_editable(&state), Err(TabloError::Forbidden(_))));
    }

    #[test]
    fn test_ensure_editable_rejects_completed() {
        let state = WorkflowState::new(1, 1).with_step(WorkflowStep::Completed);
        assert!(matches!(ensure_editable(&state), Err(TabloError::Forbidden(_))));
    }

    #[test]
    fn test_can_finalize() {
        assert!(can_finalize(&data(&[1, 2], &[2], Some(2))).valid);
        assert!(can_finalize(&data(&[1, 2], &[], Some(1))).valid);
        assert_eq!(
            can_finalize(&data(&[], &[], None)).reason,
            Some(InvalidStateReason::NoClaimedPhotos)
        );
        assert_eq!(
            can_finalize(&data(&[1], &[], None)).reason,
            Some(InvalidStateReason::NoTabloPhoto)
        );
        assert_eq!(
            can_finalize(&data(&[1, 2], &[2], Some(1))).reason,
            Some(InvalidStateReason::TabloNotInRetouch)
        );
        assert_eq!(
            can_finalize(&data(&[1], &[], Some(99))).reason,
            Some(InvalidStateReason::TabloNotInClaimed)
        );
    }

    #[test]
    fn test_can_enter_step() {
        let empty = data(&[], &[], None);
        let claimed = data(&[4], &[], None);

        assert!(can_enter_step(WorkflowStep::Claiming, &empty).valid);
        assert!(!can_enter_step(WorkflowStep::Retouch, &empty).valid);
        assert!(can_enter_step(WorkflowStep::Retouch, &claimed).valid);
        assert!(can_enter_step(WorkflowStep::Tablo, &claimed).valid);
        assert_eq!(
            can_enter_step(WorkflowStep::Completed, &claimed).reason,
            Some(InvalidStateReason::FinalizeRequired)
        );
    }
}
