//! Workflow engine
//!
//! Boundary operations over a [`WorkflowStateStore`]. Each operation takes
//! the acting user and the gallery, loads the progress record, applies the
//! pure domain function, persists the result, and folds the outcome into an
//! [`ActionResponse`]. Errors never escape as `Err`.

mod clock;
mod step_data;

pub use clock::{Clock, FixedClock, SystemClock};
pub use step_data::{SelectionSummaryProvider, StepDataProvider};

use serde_json::{json, Value};

use crate::domain::{self, NavigationTarget};
use crate::errors::{Result, TabloError};
use crate::schemas::{ActionResponse, Config, MediaId, User, WorkflowState, WorkflowStep};
use crate::store::WorkflowStateStore;

/// Selection workflow engine with injected store, config, clock and view provider
pub struct WorkflowEngine<S: WorkflowStateStore> {
    store: S,
    config: Config,
    clock: Box<dyn Clock>,
    step_data: Box<dyn StepDataProvider>,
}

fn state_payload(state: &WorkflowState) -> Value {
    json!({
        "current_step": state.current_step,
        "workflow_status": state.workflow_status,
        "steps_data": state.steps_data,
        "version": state.version,
    })
}

/// Refuse a stored record whose selections break the claimed ⊇ retouch ⊇ tablo chain.
fn verified(state: WorkflowState) -> Result<WorkflowState> {
    if domain::selections_consistent(&state.steps_data) {
        return Ok(state);
    }
    tracing::error!(
        user_id = state.user_id,
        gallery_id = state.gallery_id,
        version = state.version,
        "stored workflow record has inconsistent selections"
    );
    Err(TabloError::InvalidJson(format!(
        "progress record of user {} in gallery {} has inconsistent selections",
        state.user_id, state.gallery_id
    )))
}

fn respond(operation: &str, user: &User, gallery_id: u64, result: Result<Value>) -> ActionResponse {
    if let Err(e) = &result {
        tracing::info!(
            operation,
            user_id = user.id,
            gallery_id,
            code = e.code(),
            error = %e,
            "workflow action refused"
        );
    }
    ActionResponse::from(result)
}

impl<S: WorkflowStateStore> WorkflowEngine<S> {
    pub fn new(store: S, config: Config) -> Self {
        WorkflowEngine {
            store,
            config,
            clock: Box::new(SystemClock),
            step_data: Box::new(SelectionSummaryProvider),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_step_data_provider(mut self, provider: impl StepDataProvider + 'static) -> Self {
        self.step_data = Box::new(provider);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn load(&self, user: &User, gallery_id: u64) -> Result<WorkflowState> {
        let state = self.store.get(user.id, gallery_id)?.ok_or_else(|| {
            TabloError::NotFound(format!("user {} has no progress in gallery {}", user.id, gallery_id))
        })?;
        verified(state)
    }

    fn load_or_create(&self, user: &User, gallery_id: u64) -> Result<WorkflowState> {
        self.store.get_or_create(user.id, gallery_id).and_then(verified)
    }

    /// Stamp the record with the engine clock and hand it to the store.
    fn persist(&mut self, mut state: WorkflowState) -> Result<WorkflowState> {
        let now = self.clock.now();
        if state.version == 0 {
            state.created_at = now;
        }
        state.updated_at = now;
        self.store.save(&state)
    }

    // ===== SELECTION ACTIONS =====

    /// Replace the claimed photos; reports cascaded removals
    pub fn save_claiming_selection(
        &mut self,
        user: &User,
        gallery_id: u64,
        photo_ids: &[MediaId],
    ) -> ActionResponse {
        let result = self.try_save_claiming(user, gallery_id, photo_ids);
        respond("save_claiming_selection", user, gallery_id, result)
    }

    fn try_save_claiming(&mut self, user: &User, gallery_id: u64, photo_ids: &[MediaId]) -> Result<Value> {
        let state = self.load_or_create(user, gallery_id)?;
        let (next, report) = domain::save_claiming_selection(&state, photo_ids)?;
        let saved = self.persist(next)?;
        Ok(json!({ "state": state_payload(&saved), "cascade": report }))
    }

    /// Replace the retouch photos; unclaimed ids are dropped
    pub fn save_retouch_selection(
        &mut self,
        user: &User,
        gallery_id: u64,
        photo_ids: &[MediaId],
    ) -> ActionResponse {
        let result = self.try_save_retouch(user, gallery_id, photo_ids);
        respond("save_retouch_selection", user, gallery_id, result)
    }

    fn try_save_retouch(&mut self, user: &User, gallery_id: u64, photo_ids: &[MediaId]) -> Result<Value> {
        let state = self.load_or_create(user, gallery_id)?;
        let (next, report) =
            domain::save_retouch_selection(&state, photo_ids, self.config.max_retouch_photos)?;
        let saved = self.persist(next)?;
        Ok(json!({ "state": state_payload(&saved), "cascade": report }))
    }

    /// Pick the tablo portrait
    pub fn save_tablo_photo(&mut self, user: &User, gallery_id: u64, photo_id: MediaId) -> ActionResponse {
        let result = self
            .load_or_create(user, gallery_id)
            .and_then(|state| domain::save_tablo_photo(&state, photo_id))
            .and_then(|next| self.persist(next))
            .map(|saved| json!({ "state": state_payload(&saved) }));
        respond("save_tablo_photo", user, gallery_id, result)
    }

    /// Remove the tablo pick
    pub fn clear_tablo_photo(&mut self, user: &User, gallery_id: u64) -> ActionResponse {
        let result = self
            .load_or_create(user, gallery_id)
            .and_then(|state| domain::clear_tablo_photo(&state))
            .and_then(|next| self.persist(next))
            .map(|saved| json!({ "state": state_payload(&saved) }));
        respond("clear_tablo_photo", user, gallery_id, result)
    }

    // ===== NAVIGATION =====

    pub fn next_step(&mut self, user: &User, gallery_id: u64) -> ActionResponse {
        let result = self.try_navigate(user, gallery_id, NavigationTarget::Next);
        respond("next_step", user, gallery_id, result)
    }

    pub fn previous_step(&mut self, user: &User, gallery_id: u64) -> ActionResponse {
        let result = self.try_navigate(user, gallery_id, NavigationTarget::Previous);
        respond("previous_step", user, gallery_id, result)
    }

    pub fn go_to_step(&mut self, user: &User, gallery_id: u64, step: WorkflowStep) -> ActionResponse {
        let result = self.try_navigate(user, gallery_id, NavigationTarget::Step(step));
        respond("go_to_step", user, gallery_id, result)
    }

    fn try_navigate(&mut self, user: &User, gallery_id: u64, target: NavigationTarget) -> Result<Value> {
        let state = self.load(user, gallery_id)?;
        let transition = domain::apply_step_transition(&state, user, target)?;
        let saved = self.persist(transition.next_state.clone())?;
        let summary = transition.summary();
        Ok(json!({
            "state": state_payload(&saved),
            "from": summary.from,
            "to": summary.to,
            "auto_fixed": summary.auto_fixed,
        }))
    }

    // ===== FINALIZATION =====

    /// Lock the selection
    pub fn finalize(&mut self, user: &User, gallery_id: u64, cart_comment: Option<String>) -> ActionResponse {
        let now = self.clock.now();
        let result = self
            .load(user, gallery_id)
            .and_then(|state| domain::finalize(&state, cart_comment, now))
            .and_then(|next| self.persist(next))
            .map(|saved| {
                json!({
                    "state": state_payload(&saved),
                    "finalized_at": saved.finalized_at,
                })
            });
        respond("finalize", user, gallery_id, result)
    }

    /// Re-open a finalized selection, free inside the configured window
    pub fn request_modification(&mut self, user: &User, gallery_id: u64) -> ActionResponse {
        let result = self.try_request_modification(user, gallery_id);
        respond("request_modification", user, gallery_id, result)
    }

    fn try_request_modification(&mut self, user: &User, gallery_id: u64) -> Result<Value> {
        let state = self.load(user, gallery_id)?;
        let (next, outcome) = domain::request_modification(
            &state,
            self.config.free_edit_window_hours,
            self.clock.now(),
        )?;
        let saved = self.persist(next)?;
        Ok(json!({
            "state": state_payload(&saved),
            "was_free": outcome.was_free,
            "modification_count": outcome.modification_count,
        }))
    }

    // ===== QUERIES =====

    /// Current progress with the computed neighbouring steps
    pub fn get_status(&self, user: &User, gallery_id: u64) -> ActionResponse {
        let result = self.load(user, gallery_id).map(|state| {
            let free_modification = state.is_finalized()
                && domain::is_free_modification(
                    &state,
                    self.config.free_edit_window_hours,
                    self.clock.now(),
                );
            json!({
                "state": state_payload(&state),
                "next_step": domain::determine_next_step(state.current_step, user),
                "previous_step": domain::determine_previous_step(state.current_step, user),
                "is_finalized": state.is_finalized(),
                "can_request_free_modification": free_modification,
                "finalized_at": state.finalized_at,
                "modification_count": state.modification_count,
                "cart_comment": state.cart_comment,
            })
        });
        respond("get_status", user, gallery_id, result)
    }

    /// View model for one step, built by the configured provider
    pub fn get_step_data(&self, user: &User, gallery_id: u64, step: WorkflowStep) -> ActionResponse {
        let result = self
            .load_or_create(user, gallery_id)
            .and_then(|state| self.step_data.step_data(user, &state, step));
        respond("get_step_data", user, gallery_id, result)
    }
}
