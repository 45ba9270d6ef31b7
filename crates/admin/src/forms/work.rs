//! The work-item form session.
//!
//! The richest of the admin forms: validated text fields, a free-form
//! resource chip list, a single-slot logo, and an appended image gallery
//! fed by multipart upload batches.

use folio_client::gateway::{AdminGateway, UploadFile};
use folio_client::upload::UploadJob;
use folio_core::content::WorkItem;
use folio_core::media::{MediaSet, UploadDestination};
use folio_core::status::StatusReporter;
use folio_core::types::DocId;
use folio_core::validation::schemas::work_schema;
use folio_core::validation::{evaluate, FieldErrors, Schema};

use crate::navigation::{EntityKind, Navigator};
use crate::session::{report_save, SubmitPhase};

/// Current text-input values. Number inputs deliver strings too; `weight`
/// is parsed only after its rules pass.
#[derive(Debug, Clone, Default)]
pub struct WorkFields {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub git: String,
    pub weight: String,
    pub description: String,
}

/// One editing session over a work item.
pub struct WorkForm {
    id: Option<DocId>,
    pub fields: WorkFields,
    pub resources: Vec<String>,
    media: MediaSet,
    schema: Schema,
    errors: FieldErrors,
    status: StatusReporter,
    navigator: Navigator,
    submitting: bool,
    uploading: bool,
    phase: SubmitPhase,
}

impl WorkForm {
    /// A blank session for a new work item.
    pub fn create() -> Self {
        Self::with_parts(None, WorkFields::default(), Vec::new(), MediaSet::default())
    }

    /// A session editing a persisted work item.
    pub fn edit(work: WorkItem) -> Self {
        let fields = WorkFields {
            name: work.name,
            slug: work.slug,
            url: work.url,
            git: work.git,
            weight: work.weight.to_string(),
            description: work.description,
        };
        let media = MediaSet::new(work.logo, work.images);
        Self::with_parts(work.id, fields, work.resources, media)
    }

    fn with_parts(
        id: Option<DocId>,
        fields: WorkFields,
        resources: Vec<String>,
        media: MediaSet,
    ) -> Self {
        Self {
            id,
            fields,
            resources,
            media,
            schema: work_schema(),
            errors: FieldErrors::new(),
            status: StatusReporter::default(),
            navigator: Navigator::default(),
            submitting: false,
            uploading: false,
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

    pub fn media(&self) -> &MediaSet {
        &self.media
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Append one resource chip.
    pub fn add_resource(&mut self, value: impl Into<String>) {
        self.resources.push(value.into());
    }

    /// Remove one resource chip; out-of-bounds is a no-op.
    pub fn remove_resource(&mut self, index: usize) {
        if index < self.resources.len() {
            self.resources.remove(index);
        }
    }

    /// Drop one gallery image locally.
    pub fn remove_image(&mut self, index: usize) {
        self.media.remove_image(index);
    }

    /// Run one upload batch and merge the outcome.
    ///
    /// The uploading flag is held for the duration of the single multipart
    /// request. On failure the error text is shown and the media set is
    /// left untouched -- a batch applies completely or not at all.
    pub async fn upload(
        &mut self,
        gateway: &dyn AdminGateway,
        destination: UploadDestination,
        files: Vec<UploadFile>,
    ) {
        self.uploading = true;

        match UploadJob::new(files).run(gateway, destination).await {
            UploadJob::Succeeded(results) => self.media.apply_uploads(destination, &results),
            UploadJob::Failed(message) => self.status.error(format!("Error: {message}")),
            UploadJob::Pending(_) | UploadJob::InFlight => {}
        }

        self.uploading = false;
    }

    /// Validate and save.
    ///
    /// Any rule failure blocks the submit with field errors and no network
    /// traffic. On a successful create the session navigates to the work
    /// listing; an update stays put. Failures surface the literal status
    /// line and leave every edit in place.
    pub async fn submit(&mut self, gateway: &dyn AdminGateway) {
        self.phase = SubmitPhase::Validating;
        self.errors = evaluate(&self.schema, &self.values());
        if !self.errors.is_empty() {
            self.phase = SubmitPhase::Blocked;
            return;
        }

        let weight = match self.fields.weight.trim().parse::<i64>() {
            Ok(weight) => weight,
            Err(_) => {
                self.errors
                    .insert("weight".into(), "Weight must be a number".into());
                self.phase = SubmitPhase::Blocked;
                return;
            }
        };

        self.submitting = true;
        self.phase = SubmitPhase::Submitting;

        let payload = WorkItem {
            id: None,
            name: self.fields.name.clone(),
            slug: self.fields.slug.clone(),
            url: self.fields.url.clone(),
            git: self.fields.git.clone(),
            weight,
            description: self.fields.description.clone(),
            resources: self.resources.clone(),
            logo: self.media.logo.clone(),
            images: self.media.images.clone(),
        };

        let result = gateway.save_work(self.id.as_deref(), &payload).await;

        if report_save(
            &mut self.status,
            &result,
            "Success! Your work has been saved",
        ) && self.id.is_none()
        {
            self.navigator.go_to_listing(EntityKind::Work);
            self.phase = SubmitPhase::Navigated;
        } else {
            self.phase = SubmitPhase::Idle;
        }

        self.submitting = false;
    }

    fn values(&self) -> serde_json::Map<String, serde_json::Value> {
        let value = serde_json::json!({
            "name": &self.fields.name,
            "slug": &self.fields.slug,
            "url": &self.fields.url,
            "git": &self.fields.git,
            "weight": &self.fields.weight,
            "description": &self.fields.description,
        });
        value.as_object().expect("values literal is an object").clone()
    }
}
