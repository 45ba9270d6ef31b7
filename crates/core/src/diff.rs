//! Experience list diff tracking.
//!
//! The experience form edits a committed list against two pending sets:
//! additions the operator has staged but not yet saved, and removals of
//! already-persisted badges. One submit turns both sets into a single
//! [`DiffSet`] payload; the store applies it as a batch.

use crate::content::{DiffSet, ExperienceItem};

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Reconciles the locally edited experience list against the store.
///
/// `committed` is seeded from the read path when the session starts.
/// Staged additions live in `pending_add` until [`commit`](Self::commit)
/// merges them; removals of committed badges accumulate in
/// `pending_remove` carrying the exact removed documents.
#[derive(Debug, Clone, Default)]
pub struct ExperienceTracker {
    committed: Vec<ExperienceItem>,
    pending_add: Vec<ExperienceItem>,
    pending_remove: Vec<ExperienceItem>,
    candidate: ExperienceItem,
    input_error: bool,
}

/// The tracker's sequences as they stood before a submit, used to put the
/// optimistic merge back when the save fails.
#[derive(Debug, Clone)]
pub struct TrackerSnapshot {
    committed: Vec<ExperienceItem>,
    pending_add: Vec<ExperienceItem>,
    pending_remove: Vec<ExperienceItem>,
}

impl ExperienceTracker {
    /// Start a session over the committed list the read path supplied.
    pub fn new(committed: Vec<ExperienceItem>) -> Self {
        Self {
            committed,
            ..Self::default()
        }
    }

    pub fn committed(&self) -> &[ExperienceItem] {
        &self.committed
    }

    pub fn pending_add(&self) -> &[ExperienceItem] {
        &self.pending_add
    }

    pub fn pending_remove(&self) -> &[ExperienceItem] {
        &self.pending_remove
    }

    pub fn candidate(&self) -> &ExperienceItem {
        &self.candidate
    }

    /// Whether the last [`add_candidate`](Self::add_candidate) was rejected
    /// for a missing sub-field.
    pub fn input_error(&self) -> bool {
        self.input_error
    }

    pub fn set_candidate_name(&mut self, name: impl Into<String>) {
        self.candidate.name = name.into();
    }

    pub fn set_candidate_icon(&mut self, icon: impl Into<String>) {
        self.candidate.icon = icon.into();
    }

    /// Stage the current candidate as an addition.
    ///
    /// Both sub-fields must be non-empty; otherwise the input-error flag is
    /// raised and nothing changes. On success the candidate resets to empty
    /// and the flag clears.
    pub fn add_candidate(&mut self) {
        if self.candidate.name.is_empty() || self.candidate.icon.is_empty() {
            self.input_error = true;
            return;
        }

        self.pending_add.push(self.candidate.clone());
        self.candidate = ExperienceItem::new("", "");
        self.input_error = false;
    }

    /// Unstage a pending addition. The item was never persisted, so no
    /// removal entry is created. Out-of-bounds indices are a no-op.
    pub fn remove_addition(&mut self, index: usize) {
        if index < self.pending_add.len() {
            self.pending_add.remove(index);
        }
    }

    /// Remove a committed badge, recording the removed document itself in
    /// `pending_remove`. Out-of-bounds indices are a no-op.
    pub fn remove_committed(&mut self, index: usize) {
        if index < self.committed.len() {
            let removed = self.committed.remove(index);
            self.pending_remove.push(removed);
        }
    }

    /// Produce the submit payload.
    ///
    /// Returns `None` when both pending sets are empty -- the form issues no
    /// network call at all in that case. Otherwise `pending_add` is merged
    /// into `committed` here, before the save resolves; local state runs
    /// ahead of the store until the response lands (see
    /// [`snapshot`](Self::snapshot) for the failure path).
    pub fn commit(&mut self) -> Option<DiffSet<ExperienceItem>> {
        if self.pending_add.is_empty() && self.pending_remove.is_empty() {
            return None;
        }

        let added = std::mem::take(&mut self.pending_add);
        self.committed.extend(added.iter().cloned());

        Some(DiffSet {
            added,
            removed: self.pending_remove.clone(),
        })
    }

    /// Capture the sequences as they stand, taken immediately before
    /// [`commit`](Self::commit).
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            committed: self.committed.clone(),
            pending_add: self.pending_add.clone(),
            pending_remove: self.pending_remove.clone(),
        }
    }

    /// Put the sequences back to a pre-submit snapshot after a failed save.
    /// The candidate input and error flag are left as the operator last
    /// touched them.
    pub fn restore(&mut self, snapshot: TrackerSnapshot) {
        self.committed = snapshot.committed;
        self.pending_add = snapshot.pending_add;
        self.pending_remove = snapshot.pending_remove;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(name: &str, icon: &str) -> ExperienceItem {
        ExperienceItem::new(name, icon)
    }

    fn tracker_with(names: &[(&str, &str)]) -> ExperienceTracker {
        ExperienceTracker::new(names.iter().map(|(n, i)| badge(n, i)).collect())
    }

    #[test]
    fn add_candidate_stages_copy_and_resets_input() {
        let mut tracker = ExperienceTracker::default();
        tracker.set_candidate_name("Rust");
        tracker.set_candidate_icon("i-rust");

        tracker.add_candidate();

        assert_eq!(tracker.pending_add(), &[badge("Rust", "i-rust")]);
        assert_eq!(tracker.candidate().name, "");
        assert_eq!(tracker.candidate().icon, "");
        assert!(!tracker.input_error());
    }

    #[test]
    fn add_candidate_with_missing_field_sets_error_only() {
        let mut tracker = ExperienceTracker::default();
        tracker.set_candidate_name("Rust");

        tracker.add_candidate();

        assert!(tracker.pending_add().is_empty());
        assert!(tracker.input_error());
        // The partial input is kept for the operator to finish.
        assert_eq!(tracker.candidate().name, "Rust");
    }

    #[test]
    fn add_candidate_clears_previous_error() {
        let mut tracker = ExperienceTracker::default();
        tracker.add_candidate();
        assert!(tracker.input_error());

        tracker.set_candidate_name("Rust");
        tracker.set_candidate_icon("i-rust");
        tracker.add_candidate();
        assert!(!tracker.input_error());
    }

    #[test]
    fn remove_addition_only_touches_pending_add() {
        let mut tracker = tracker_with(&[("Go", "i-go")]);
        tracker.set_candidate_name("Rust");
        tracker.set_candidate_icon("i-rust");
        tracker.add_candidate();

        tracker.remove_addition(0);

        assert!(tracker.pending_add().is_empty());
        assert!(tracker.pending_remove().is_empty());
        assert_eq!(tracker.committed().len(), 1);
    }

    #[test]
    fn remove_addition_out_of_bounds_is_noop() {
        let mut tracker = ExperienceTracker::default();
        tracker.remove_addition(5);
        assert!(tracker.pending_add().is_empty());
    }

    #[test]
    fn remove_committed_moves_exact_value() {
        let mut tracker = tracker_with(&[("Go", "i-go"), ("Docker", "i-docker")]);

        tracker.remove_committed(0);

        assert_eq!(tracker.committed(), &[badge("Docker", "i-docker")]);
        assert_eq!(tracker.pending_remove(), &[badge("Go", "i-go")]);
    }

    #[test]
    fn commit_with_nothing_pending_is_none() {
        let mut tracker = tracker_with(&[("Go", "i-go")]);
        assert!(tracker.commit().is_none());
        assert_eq!(tracker.committed().len(), 1);
    }

    #[test]
    fn commit_merges_additions_optimistically() {
        let mut tracker = tracker_with(&[("Go", "i-go")]);
        tracker.set_candidate_name("Rust");
        tracker.set_candidate_icon("i-rust");
        tracker.add_candidate();

        let diff = tracker.commit().expect("diff should be produced");

        assert_eq!(diff.added, vec![badge("Rust", "i-rust")]);
        assert!(diff.removed.is_empty());
        // Merged locally before any response arrives.
        assert_eq!(
            tracker.committed(),
            &[badge("Go", "i-go"), badge("Rust", "i-rust")]
        );
        assert!(tracker.pending_add().is_empty());
    }

    #[test]
    fn commit_carries_removals() {
        let mut tracker = tracker_with(&[("Go", "i-go"), ("Docker", "i-docker")]);
        tracker.remove_committed(1);

        let diff = tracker.commit().expect("diff should be produced");

        assert!(diff.added.is_empty());
        assert_eq!(diff.removed, vec![badge("Docker", "i-docker")]);
    }

    #[test]
    fn snapshot_restore_reverts_optimistic_merge() {
        let mut tracker = tracker_with(&[("Go", "i-go")]);
        tracker.set_candidate_name("Rust");
        tracker.set_candidate_icon("i-rust");
        tracker.add_candidate();
        tracker.remove_committed(0);

        let snapshot = tracker.snapshot();
        let _diff = tracker.commit().expect("diff should be produced");

        // Simulated failed save: everything returns to pre-submit state.
        tracker.restore(snapshot);

        assert!(tracker.committed().is_empty());
        assert_eq!(tracker.pending_add(), &[badge("Rust", "i-rust")]);
        assert_eq!(tracker.pending_remove(), &[badge("Go", "i-go")]);
    }
}
