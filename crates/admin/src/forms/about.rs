//! The about-timeline form session.

use folio_client::gateway::AdminGateway;
use folio_core::content::AboutEntry;
use folio_core::status::StatusReporter;
use folio_core::types::DocId;
use folio_core::validation::schemas::about_schema;
use folio_core::validation::{evaluate, FieldErrors, Schema};

use crate::navigation::{EntityKind, Navigator};
use crate::session::{report_save, SubmitPhase};

/// Current text-input values for one timeline entry.
#[derive(Debug, Clone, Default)]
pub struct AboutFields {
    pub year_from: String,
    pub year_to: String,
    pub description: String,
}

/// One editing session over a timeline entry.
pub struct AboutForm {
    id: Option<DocId>,
    pub fields: AboutFields,
    schema: Schema,
    errors: FieldErrors,
    status: StatusReporter,
    navigator: Navigator,
    submitting: bool,
    phase: SubmitPhase,
}

impl AboutForm {
    /// A blank session for a new timeline entry.
    pub fn create() -> Self {
        Self::with_parts(None, AboutFields::default())
    }

    /// A session editing a persisted entry.
    pub fn edit(entry: AboutEntry) -> Self {
        let fields = AboutFields {
            year_from: entry.year_from,
            year_to: entry.year_to.unwrap_or_default(),
            description: entry.description,
        };
        Self::with_parts(entry.id, fields)
    }

    fn with_parts(id: Option<DocId>, fields: AboutFields) -> Self {
        Self {
            id,
            fields,
            schema: about_schema(),
            errors: FieldErrors::new(),
            status: StatusReporter::default(),
            navigator: Navigator::default(),
            submitting: false,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &StatusReporter {
        &self.status
    }

    pub fn dismiss_status(&mut self) {
        self.status.dismiss();
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Validate and save; creates navigate to the timeline listing.
    pub async fn submit(&mut self, gateway: &dyn AdminGateway) {
        self.phase = SubmitPhase::Validating;
        self.errors = evaluate(&self.schema, &self.values());
        if !self.errors.is_empty() {
            self.phase = SubmitPhase::Blocked;
            return;
        }

        self.submitting = true;
        self.phase = SubmitPhase::Submitting;

        let payload = AboutEntry {
            id: None,
            year_from: self.fields.year_from.clone(),
            year_to: (!self.fields.year_to.is_empty()).then(|| self.fields.year_to.clone()),
            description: self.fields.description.clone(),
            // The form does not manage the entry's image; the upload flow
            // for timeline portraits lives outside this session.
            image: None,
        };

        let result = gateway.save_about(self.id.as_deref(), &payload).await;

        if report_save(
            &mut self.status,
            &result,
            "Success! Your timeline has been saved",
        ) && self.id.is_none()
        {
            self.navigator.go_to_listing(EntityKind::About);
            self.phase = SubmitPhase::Navigated;
        } else {
            self.phase = SubmitPhase::Idle;
        }

        self.submitting = false;
    }

    fn values(&self) -> serde_json::Map<String, serde_json::Value> {
        let value = serde_json::json!({
            "year_from": &self.fields.year_from,
            "year_to": &self.fields.year_to,
            "description": &self.fields.description,
        });
        value.as_object().expect("values literal is an object").clone()
    }
}
