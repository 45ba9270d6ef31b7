//! The experience-badge form session.
//!
//! A list-style form: no field schema, one diff tracker. A submit with
//! nothing pending issues no network call at all.

use folio_client::gateway::AdminGateway;
use folio_core::content::ExperienceItem;
use folio_core::diff::ExperienceTracker;
use folio_core::status::StatusReporter;

use crate::session::{report_save, SubmitPhase};

/// One editing session over the experience collection.
pub struct ExperienceForm {
    tracker: ExperienceTracker,
    status: StatusReporter,
    submitting: bool,
    phase: SubmitPhase,
}

impl ExperienceForm {
    /// Start from the committed collection the read path supplied.
    pub fn new(committed: Vec<ExperienceItem>) -> Self {
        Self {
            tracker: ExperienceTracker::new(committed),
            status: StatusReporter::default(),
            submitting: false,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn tracker(&self) -> &ExperienceTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ExperienceTracker {
        &mut self.tracker
    }

    pub fn status(&self) -> &StatusReporter {
        &self.status
    }

    pub fn dismiss_status(&mut self) {
        self.status.dismiss();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Commit the pending sets and save the diff.
    ///
    /// The tracker merges staged additions locally before the request
    /// resolves; if the save fails, the pre-submit snapshot is restored so
    /// the list shows what the store actually holds.
    pub async fn submit(&mut self, gateway: &dyn AdminGateway) {
        let snapshot = self.tracker.snapshot();

        let Some(diff) = self.tracker.commit() else {
            return;
        };

        self.submitting = true;
        self.phase = SubmitPhase::Submitting;

        let result = gateway.save_experience(&diff).await;

        if !report_save(
            &mut self.status,
            &result,
            "Success! Your experiences have been saved",
        ) {
            self.tracker.restore(snapshot);
        }

        self.submitting = false;
        self.phase = SubmitPhase::Idle;
    }
}
