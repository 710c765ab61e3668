//! Workflow step ordering
//!
//! The workflow follows a linear progression:
//! claiming → registration → retouch → tablo → completed
//!
//! Customers (already registered users) skip the registration step in both
//! directions.

use crate::schemas::{User, WorkflowStep};

/// The canonical ordering of workflow steps.
pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    WorkflowStep::Claiming,
    WorkflowStep::Registration,
    WorkflowStep::Retouch,
    WorkflowStep::Tablo,
    WorkflowStep::Completed,
];

/// Get the 0-based index of a step in the workflow progression.
pub fn get_step_index(step: WorkflowStep) -> usize {
    WORKFLOW_STEPS
        .iter()
        .position(|&s| s == step)
        .unwrap_or(usize::MAX)
}

/// Whether `step` is part of this user's path through the workflow
pub fn is_step_visible(step: WorkflowStep, user: &User) -> bool {
    !(step == WorkflowStep::Registration && user.is_customer())
}

/// Returns the next step for the user, or None after the terminal step.
///
/// A customer parked on `registration` still gets a next step, so that a
/// stale record can be moved forward.
pub fn determine_next_step(current: WorkflowStep, user: &User) -> Option<WorkflowStep> {
    let index = get_step_index(current);
    WORKFLOW_STEPS
        .iter()
        .skip(index.saturating_add(1))
        .copied()
        .find(|&step| is_step_visible(step, user))
}

/// Returns the previous step for the user, or None on the first step.
pub fn determine_previous_step(current: WorkflowStep, user: &User) -> Option<WorkflowStep> {
    let index = get_step_index(current);
    if index == usize::MAX {
        return None;
    }
    WORKFLOW_STEPS[..index]
        .iter()
        .rev()
        .copied()
        .find(|&step| is_step_visible(step, user))
}

/// Check if a step is the terminal step (completed).
pub fn is_terminal_step(step: WorkflowStep) -> bool {
    step == WorkflowStep::Completed
}
