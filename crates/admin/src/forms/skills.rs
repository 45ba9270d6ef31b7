//! The skills form session.
//!
//! Every skill is edited in place through step-5 sliders; one submit
//! replaces the whole collection.

use folio_client::gateway::AdminGateway;
use folio_core::content::SkillItem;
use folio_core::skills::SkillBoard;
use folio_core::status::StatusReporter;

use crate::session::{report_save, SubmitPhase};

/// One editing session over the skill collection.
pub struct SkillsForm {
    board: SkillBoard,
    status: StatusReporter,
    submitting: bool,
    phase: SubmitPhase,
}

impl SkillsForm {
    /// Start from the collection the read path supplied.
    pub fn new(values: Vec<SkillItem>) -> Self {
        Self {
            board: SkillBoard::new(values),
            status: StatusReporter::default(),
            submitting: false,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn values(&self) -> &[SkillItem] {
        self.board.values()
    }

    /// Move one slider; the stored percent snaps to the step grid.
    pub fn set_percent(&mut self, index: usize, value: i64) {
        self.board.set_percent(index, value);
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

    /// Save the whole collection. No validation layer: the sliders cannot
    /// produce an out-of-domain value.
    pub async fn submit(&mut self, gateway: &dyn AdminGateway) {
        self.submitting = true;
        self.phase = SubmitPhase::Submitting;

        let result = gateway.save_skills(self.board.values()).await;
        report_save(
            &mut self.status,
            &result,
            "Success! Your skills have been saved",
        );

        self.submitting = false;
        self.phase = SubmitPhase::Idle;
    }
}
