//! Cascade invalidation helpers
//!
//! When an upstream selection shrinks, downstream selections that are no
//! longer valid are removed and reported back to the client.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::schemas::{MediaId, WorkflowStepsData};

/// What a selection save removed as a side effect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    /// Retouch ids removed because they are no longer claimed
    pub removed_retouch_ids: Vec<MediaId>,

    /// Requested retouch ids ignored because they were never claimed
    pub dropped_retouch_ids: Vec<MediaId>,

    /// The tablo pick that was cleared, if any
    pub cleared_tablo_id: Option<MediaId>,
}

impl CascadeReport {
    /// Whether anything besides the requested change happened
    pub fn has_changes(&self) -> bool {
        !self.removed_retouch_ids.is_empty()
            || !self.dropped_retouch_ids.is_empty()
            || self.cleared_tablo_id.is_some()
    }
}

/// Split `selected` into the ids present in `allowed` and the rest.
pub fn partition_allowed(
    selected: &BTreeSet<MediaId>,
    allowed: &BTreeSet<MediaId>,
) -> (BTreeSet<MediaId>, Vec<MediaId>) {
    let kept = selected.intersection(allowed).copied().collect();
    let removed = selected.difference(allowed).copied().collect();
    (kept, removed)
}

/// Clear the tablo pick if it is outside the current candidate set.
///
/// Returns the cleared id.
pub fn reconcile_tablo(data: &mut WorkflowStepsData) -> Option<MediaId> {
    let tablo = data.tablo_media_id?;
    if data.tablo_candidates().contains(&tablo) {
        return None;
    }
    data.tablo_media_id = None;
    Some(tablo)
}

/// Whether the selections satisfy both subset invariants
pub fn selections_consistent(data: &WorkflowStepsData) -> bool {
    let retouch_ok = data.retouch_media_ids.is_subset(&data.claimed_media_ids);
    let tablo_ok = match data.tablo_media_id {
        Some(id) => data.tablo_candidates().contains(&id),
        None => true,
    };
    retouch_ok && tablo_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[MediaId]) -> BTreeSet<MediaId> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_partition_allowed() {
        let (kept, removed) = partition_allowed(&ids(&[2, 3, 7]), &ids(&[1, 2, 3]));
        assert_eq!(kept, ids(&[2, 3]));
        assert_eq!(removed, vec![7]);
    }

    #[test]
    fn test_reconcile_tablo_keeps_valid_pick() {
        let mut data = WorkflowStepsData {
            claimed_media_ids: ids(&[1, 2]),
            retouch_media_ids: ids(&[2]),
            tablo_media_id: Some(2),
            ..Default::default()
        };
        assert_eq!(reconcile_tablo(&mut data), None);
        assert_eq!(data.tablo_media_id, Some(2));
    }

    #[test]
    fn test_reconcile_tablo_clears_pick_outside_retouch() {
        let mut data = WorkflowStepsData {
            claimed_media_ids: ids(&[1, 2]),
            retouch_media_ids: ids(&[2]),
            tablo_media_id: Some(1),
            ..Default::default()
        };
        assert_eq!(reconcile_tablo(&mut data), Some(1));
        assert_eq!(data.tablo_media_id, None);
    }

    #[test]
    fn test_reconcile_tablo_with_no_pick() {
        let mut data = WorkflowStepsData::default();
        assert_eq!(reconcile_tablo(&mut data), None);
    }

    #[test]
    fn test_selections_consistent() {
        let good = WorkflowStepsData {
            claimed_media_ids: ids(&[1, 2]),
            retouch_media_ids: ids(&[2]),
            tablo_media_id: Some(2),
            ..Default::default()
        };
        assert!(selections_consistent(&good));

        let bad = WorkflowStepsData {
            claimed_media_ids: ids(&[1]),
            retouch_media_ids: ids(&[2]),
            ..Default::default()
        };
        assert!(!selections_consistent(&bad));
    }

    #[test]
    fn test_report_has_changes() {
        assert!(!CascadeReport::default().has_changes());
        let report = CascadeReport {
            cleared_tablo_id: Some(3),
            ..Default::default()
        };
        assert!(report.has_changes());
    }
}
