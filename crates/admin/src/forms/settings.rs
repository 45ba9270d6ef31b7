//! The site-settings form session.
//!
//! Edits the settings singleton. Deliberately permissive: no rules, both
//! fields sent as typed.

use folio_client::gateway::AdminGateway;
use folio_core::content::SiteSettings;
use folio_core::status::StatusReporter;

use crate::session::{report_save, SubmitPhase};

/// One editing session over the settings document.
pub struct SettingsForm {
    pub fields: SiteSettings,
    status: StatusReporter,
    submitting: bool,
    phase: SubmitPhase,
}

impl SettingsForm {
    /// Start from the current settings document.
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            fields: settings,
            status: StatusReporter::default(),
            submitting: false,
            phase: SubmitPhase::Idle,
        }
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

    /// Save the singleton. Settings always exist, so no navigation ever
    /// follows.
    pub async fn submit(&mut self, gateway: &dyn AdminGateway) {
        self.submitting = true;
        self.phase = SubmitPhase::Submitting;

        let result = gateway.save_settings(&self.fields).await;
        report_save(
            &mut self.status,
            &result,
            "Success! Your settings have been saved",
        );

        self.submitting = false;
        self.phase = SubmitPhase::Idle;
    }
}
