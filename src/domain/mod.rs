//! Domain logic for the photo-selection workflow

mod cascade;
mod finalization;
mod selection;
mod steps;
mod transitions;
mod validation;


pub use cascade::{partition_allowed, reconcile_tablo, selections_consistent, CascadeReport};
pub use finalization::{finalize, is_free_modification, request_modification, ModificationOutcome};
pub use selection::{
    clear_tablo_photo, save_claiming_selection, save_retouch_selection, save_tablo_photo,
};
pub use steps::{
    determine_next_step, determine_previous_step, get_step_index, is_step_visible,
    is_terminal_step, WORKFLOW_STEPS,
};
pub use transitions::{apply_step_transition, NavigationTarget, StepTransition, TransitionSummary};
pub use validation::{can_enter_step, can_finalize, ensure_editable, ValidationResult};
