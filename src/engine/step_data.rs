//! Presentation data per workflow step
//!
//! Hosts plug in their own provider to enrich a step with photo URLs,
//! thumbnails, and the like. The default only reports the selections.

use serde_json::{json, Value};

use crate::errors::Result;
use crate::schemas::{User, WorkflowState, WorkflowStep};

/// Builds the view model shown for a step
pub trait StepDataProvider {
    fn step_data(&self, user: &User, state: &WorkflowState, step: WorkflowStep) -> Result<Value>;
}

/// Reports the ids and counts relevant to each step
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSummaryProvider;

impl StepDataProvider for SelectionSummaryProvider {
    fn step_data(&self, user: &User, state: &WorkflowState, step: WorkflowStep) -> Result<Value> {
        let data = &state.steps_data;
        let view = match step {
            WorkflowStep::Claiming => json!({
                "step": step,
                "claimed_media_ids": data.claimed_media_ids,
                "claimed_count": data.claimed_count,
            }),
            WorkflowStep::Registration => json!({
                "step": step,
                "requires_registration": !user.is_customer(),
            }),
            WorkflowStep::Retouch => json!({
                "step": step,
                "selectable_media_ids": data.claimed_media_ids,
                "retouch_media_ids": data.retouch_media_ids,
                "retouch_count": data.retouch_count,
            }),
            WorkflowStep::Tablo => json!({
                "step": step,
                "selectable_media_ids": data.tablo_candidates(),
                "tablo_media_id": data.tablo_media_id,
            }),
            WorkflowStep::Completed => json!({
                "step": step,
                "claimed_media_ids": data.claimed_media_ids,
                "retouch_media_ids": data.retouch_media_ids,
                "tablo_media_id": data.tablo_media_id,
                "cart_comment": state.cart_comment,
                "finalized_at": state.finalized_at,
            }),
        };
        Ok(view)
    }
}
