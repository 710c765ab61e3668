//! Step navigation
//!
//! Pure functions for moving a workflow between steps.

use serde::Serialize;

use crate::errors::{InvalidStateReason, Result, TabloError};
use crate::schemas::{User, WorkflowState, WorkflowStep};

use super::steps::{determine_next_step, determine_previous_step, is_step_visible};
use super::validation::{can_enter_step, ensure_editable};

/// Where a navigation request wants to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    Next,
    Previous,
    Step(WorkflowStep),
}

/// A successful step change
#[derive(Debug, Clone, PartialEq)]
pub struct StepTransition {
    /// The state after the move
    pub next_state: WorkflowState,

    pub from: WorkflowStep,

    pub to: WorkflowStep,

    /// The record sat on a step this user should never see and was corrected
    pub auto_fixed: bool,
}

/// Serializable summary of a transition for responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionSummary {
    pub from: WorkflowStep,
    pub to: WorkflowStep,
    pub auto_fixed: bool,
}

impl StepTransition {
    pub fn summary(&self) -> TransitionSummary {
        TransitionSummary {
            from: self.from,
            to: self.to,
            auto_fixed: self.auto_fixed,
        }
    }
}

fn resolve_target(
    state: &WorkflowState,
    user: &User,
    target: NavigationTarget,
) -> Result<(WorkflowStep, bool)> {
    let current = state.current_step;
    let stale = !is_step_visible(current, user);

    match target {
        NavigationTarget::Next => {
            let next = determine_next_step(current, user).ok_or_else(|| {
                TabloError::Forbidden(format!("no step follows {}", current))
            })?;
            Ok((next, stale))
        }
        NavigationTarget::Previous => {
            let previous = determine_previous_step(current, user)
                .ok_or_else(|| TabloError::invalid_state(InvalidStateReason::NoPreviousStep))?;
            Ok((previous, stale))
        }
        NavigationTarget::Step(step) if !is_step_visible(step, user) => {
            let fixed = determine_next_step(step, user).unwrap_or(WorkflowStep::Claiming);
            Ok((fixed, true))
        }
        NavigationTarget::Step(step) => Ok((step, stale)),
    }
}

/// Apply a navigation request to a workflow state.
///
/// Never mutates the input. Entering `completed` is refused: only finalize
/// may lock the workflow.
pub fn apply_step_transition(
    state: &WorkflowState,
    user: &User,
    target: NavigationTarget,
) -> Result<StepTransition> {
    ensure_editable(state)?;

    let (to, auto_fixed) = resolve_target(state, user, target)?;

    let validation = can_enter_step(to, &state.steps_data);
    match validation.reason {
        Some(InvalidStateReason::NoClaimedPhotos) => {
            return Err(TabloError::Validation(
                InvalidStateReason::NoClaimedPhotos.user_message().to_string(),
            ));
        }
        Some(reason) => return Err(TabloError::invalid_state(reason)),
        None => {}
    }

    if auto_fixed {
        tracing::warn!(
            user_id = state.user_id,
            gallery_id = state.gallery_id,
            from = %state.current_step,
            to = %to,
            "corrected step not visible to customer"
        );
    }

    Ok(StepTransition {
        next_state: state.clone().with_step(to),
        from: state.current_step,
        to,
        auto_fixed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{MediaId, WorkflowStatus, WorkflowStepsData};

    fn make_state(step: WorkflowStep, claimed: &[MediaId]) -> WorkflowState {
        WorkflowState::new(1, 10)
            .with_step(step)
            .with_steps_data(WorkflowStepsData {
                claimed_media_ids: claimed.iter().copied().collect(),
                ..Default::default()
            })
    }

    #[test]
    fn test_next_for_guest_enters_registration() {
        let state = make_state(WorkflowStep::Claiming, &[1]);
        let t = apply_step_transition(&state, &User::guest(1), NavigationTarget::Next).unwrap();
        assert_eq!(t.to, WorkflowStep::Registration);
        assert!(!t.auto_fixed);
        assert_eq!(t.next_state.current_step, WorkflowStep::Registration);
    }

    #[test]
    fn test_next_for_customer_skips_registration() {
        let state = make_state(WorkflowStep::Claiming, &[1]);
        let t = apply_step_transition(&state, &User::customer(1), NavigationTarget::Next).unwrap();
        assert_eq!(t.to, WorkflowStep::Retouch);
        assert!(!t.auto_fixed);
    }

    #[test]
    fn test_customer_stuck_at_registration_is_auto_fixed() {
        let state = make_state(WorkflowStep::Registration, &[1]);
        let t = apply_step_transition(&state, &User::customer(1), NavigationTarget::Next).unwrap();
        assert_eq!(t.from, WorkflowStep::Registration);
        assert_eq!(t.to, WorkflowStep::Retouch);
        assert!(t.auto_fixed);
    }

    #[test]
    fn test_next_requires_claims() {
        let state = make_state(WorkflowStep::Claiming, &[]);
        let result = apply_step_transition(&state, &User::guest(1), NavigationTarget::Next);
        assert!(matches!(result, Err(TabloError::Validation(_))));
    }

    #[test]
    fn test_next_from_tablo_requires_finalize() {
        let state = make_state(WorkflowStep::Tablo, &[1]);
        let result = apply_step_transition(&state, &User::guest(1), NavigationTarget::Next);
        assert!(matches!(
            result,
            Err(TabloError::InvalidState { reason: InvalidStateReason::FinalizeRequired, .. })
        ));
    }

    #[test]
    fn test_previous_from_claiming_fails() {
        let state = make_state(WorkflowStep::Claiming, &[]);
        let result = apply_step_transition(&state, &User::guest(1), NavigationTarget::Previous);
        assert!(matches!(
            result,
            Err(TabloError::InvalidState { reason: InvalidStateReason::NoPreviousStep, .. })
        ));
    }

    #[test]
    fn test_previous_for_customer_skips_registration() {
        let state = make_state(WorkflowStep::Retouch, &[1]);
        let t = apply_step_transition(&state, &User::customer(1), NavigationTarget::Previous).unwrap();
        assert_eq!(t.to, WorkflowStep::Claiming);
    }

    #[test]
    fn test_goto_registration_rewritten_for_customer() {
        let state = make_state(WorkflowStep::Tablo, &[1]);
        let t = apply_step_transition(
            &state,
            &User::customer(1),
            NavigationTarget::Step(WorkflowStep::Registration),
        )
        .unwrap();
        assert_eq!(t.to, WorkflowStep::Retouch);
        assert!(t.auto_fixed);
    }

    #[test]
    fn test_goto_completed_refused() {
        let state = make_state(WorkflowStep::Tablo, &[1]);
        let result = apply_step_transition(
            &state,
            &User::guest(1),
            NavigationTarget::Step(WorkflowStep::Completed),
        );
        assert!(matches!(result, Err(TabloError::InvalidState { .. })));
    }

    #[test]
    fn test_navigation_forbidden_when_finalized() {
        let mut state = make_state(WorkflowStep::Tablo, &[1]);
        state.workflow_status = WorkflowStatus::Finalized;
        let result = apply_step_transition(&state, &User::guest(1), NavigationTarget::Previous);
        assert!(matches!(result, Err(TabloError::Forbidden(_))));
    }

    #[test]
    fn test_transition_does_not_mutate_original() {
        let state = make_state(WorkflowStep::Claiming, &[1]);
        let original = state.clone();
        let _ = apply_step_transition(&state, &User::guest(1), NavigationTarget::Next);
        assert_eq!(state, original);
    }
}
