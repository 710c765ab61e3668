//! Progress schema - Per-user, per-gallery selection workflow record

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Photo identifier inside a gallery
pub type MediaId = u64;

/// Workflow step of a guest's photo selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    /// Tagging the photos that depict the guest
    Claiming,
    /// Registering contact details (skipped for customers)
    Registration,
    /// Choosing photos for professional retouching
    Retouch,
    /// Choosing the single portrait for the class composite
    Tablo,
    /// Selection finished and locked
    Completed,
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowStep::Claiming => write!(f, "claiming"),
            WorkflowStep::Registration => write!(f, "registration"),
            WorkflowStep::Retouch => write!(f, "retouch"),
            WorkflowStep::Tablo => write!(f, "tablo"),
            WorkflowStep::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for WorkflowStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claiming" => Ok(WorkflowStep::Claiming),
            "registration" => Ok(WorkflowStep::Registration),
            "retouch" => Ok(WorkflowStep::Retouch),
            "tablo" => Ok(WorkflowStep::Tablo),
            "completed" => Ok(WorkflowStep::Completed),
            _ => Err(format!("Unknown workflow step: {}", s)),
        }
    }
}

/// Lock status of the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    InProgress,
    Finalized,
}

/// Selections made during the workflow
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowStepsData {
    /// Photos the guest tagged as depicting themselves
    #[serde(default)]
    pub claimed_media_ids: BTreeSet<MediaId>,

    /// Subset of claimed photos chosen for retouching
    #[serde(default)]
    pub retouch_media_ids: BTreeSet<MediaId>,

    /// The chosen tablo portrait
    #[serde(default)]
    pub tablo_media_id: Option<MediaId>,

    #[serde(default)]
    pub claimed_count: usize,

    #[serde(default)]
    pub retouch_count: usize,
}

impl WorkflowStepsData {
    /// The set a tablo pick must belong to: retouch if non-empty, else claimed
    pub fn tablo_candidates(&self) -> &BTreeSet<MediaId> {
        if self.retouch_media_ids.is_empty() {
            &self.claimed_media_ids
        } else {
            &self.retouch_media_ids
        }
    }

    /// Resync the count fields with the sets
    pub fn recount(&mut self) {
        self.claimed_count = self.claimed_media_ids.len();
        self.retouch_count = self.retouch_media_ids.len();
    }
}

/// Progress record for one (user, gallery) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub user_id: u64,

    pub gallery_id: u64,

    pub current_step: WorkflowStep,

    #[serde(default)]
    pub workflow_status: WorkflowStatus,

    #[serde(default)]
    pub steps_data: WorkflowStepsData,

    /// Free-text note left for the studio at finalize time
    #[serde(default)]
    pub cart_comment: Option<String>,

    #[serde(default)]
    pub finalized_at: Option<DateTime<Utc>>,

    /// Number of times the workflow was re-opened after finalize
    #[serde(default)]
    pub modification_count: u32,

    #[serde(default)]
    pub last_modification_paid_at: Option<DateTime<Utc>>,

    /// Optimistic concurrency token, bumped by the store on every save
    #[serde(default)]
    pub version: u64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl WorkflowState {
    /// Create a fresh record at the claiming step
    pub fn new(user_id: u64, gallery_id: u64) -> Self {
        let now = Utc::now();
        WorkflowState {
            user_id,
            gallery_id,
            current_step: WorkflowStep::Claiming,
            workflow_status: WorkflowStatus::InProgress,
            steps_data: WorkflowStepsData::default(),
            cart_comment: None,
            finalized_at: None,
            modification_count: 0,
            last_modification_paid_at: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.workflow_status == WorkflowStatus::Finalized
    }

    /// Whether selections and step may still change
    pub fn is_editable(&self) -> bool {
        !self.is_finalized() && self.current_step != WorkflowStep::Completed
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new state at the given step, updating the timestamp
    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.current_step = step;
        self.touch_returning()
    }

    /// Return a new state with the given selections, updating the timestamp
    pub fn with_steps_data(mut self, mut steps_data: WorkflowStepsData) -> Self {
        steps_data.recount();
        self.steps_data = steps_data;
        self.touch_returning()
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[MediaId]) -> BTreeSet<MediaId> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_workflow_step_serialization() {
        assert_eq!(serde_json::to_string(&WorkflowStep::Claiming).unwrap(), "\"claiming\"");
        assert_eq!(serde_json::to_string(&WorkflowStep::Registration).unwrap(), "\"registration\"");
        assert_eq!(serde_json::to_string(&WorkflowStep::Retouch).unwrap(), "\"retouch\"");
        assert_eq!(serde_json::to_string(&WorkflowStep::Tablo).unwrap(), "\"tablo\"");
        assert_eq!(serde_json::to_string(&WorkflowStep::Completed).unwrap(), "\"completed\"");
    }

    #[test]
    fn test_workflow_step_from_str() {
        assert_eq!("retouch".parse::<WorkflowStep>().unwrap(), WorkflowStep::Retouch);
        assert!("finished".parse::<WorkflowStep>().is_err());
    }

    #[test]
    fn test_workflow_status_serialization() {
        assert_eq!(serde_json::to_string(&WorkflowStatus::InProgress).unwrap(), "\"in_progress\"");
        assert_eq!(serde_json::to_string(&WorkflowStatus::Finalized).unwrap(), "\"finalized\"");
    }

    #[test]
    fn test_new_state_defaults() {
        let state = WorkflowState::new(7, 42);
        assert_eq!(state.current_step, WorkflowStep::Claiming);
        assert_eq!(state.workflow_status, WorkflowStatus::InProgress);
        assert!(state.steps_data.claimed_media_ids.is_empty());
        assert_eq!(state.version, 0);
        assert!(state.is_editable());
    }

    #[test]
    fn test_tablo_candidates_fall_back_to_claimed() {
        let data = WorkflowStepsData {
            claimed_media_ids: ids(&[5, 6]),
            ..Default::default()
        };
        assert_eq!(data.tablo_candidates(), &ids(&[5, 6]));

        let data = WorkflowStepsData {
            claimed_media_ids: ids(&[5, 6]),
            retouch_media_ids: ids(&[6]),
            ..Default::default()
        };
        assert_eq!(data.tablo_candidates(), &ids(&[6]));
    }

    #[test]
    fn test_with_steps_data_recounts() {
        let state = WorkflowState::new(1, 1);
        let data = WorkflowStepsData {
            claimed_media_ids: ids(&[1, 2, 3]),
            retouch_media_ids: ids(&[2]),
            ..Default::default()
        };
        let updated = state.clone().with_steps_data(data);
        assert_eq!(updated.steps_data.claimed_count, 3);
        assert_eq!(updated.steps_data.retouch_count, 1);
        assert!(state.steps_data.claimed_media_ids.is_empty()); // Original unchanged
    }

    #[test]
    fn test_state_reads_sparse_json() {
        let json = r#"{
            "user_id": 3,
            "gallery_id": 9,
            "current_step": "retouch",
            "steps_data": {"claimed_media_ids": [4, 1]},
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }"#;
        let state: WorkflowState = serde_json::from_str(json).unwrap();
        assert_eq!(state.current_step, WorkflowStep::Retouch);
        assert_eq!(state.workflow_status, WorkflowStatus::InProgress);
        assert_eq!(state.steps_data.claimed_media_ids, ids(&[1, 4]));
        assert_eq!(state.steps_data.tablo_media_id, None);
    }

    #[test]
    fn test_completed_state_is_not_editable() {
        let state = WorkflowState::new(1, 1).with_step(WorkflowStep::Completed);
        assert!(!state.is_editable());
    }
}
