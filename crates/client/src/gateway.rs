//! The gateway seam between the form sessions and the admin API.
//!
//! Sessions only ever talk to [`AdminGateway`]; the production
//! implementation is [`crate::http::HttpGateway`], and tests substitute a
//! recording fake.

use async_trait::async_trait;

use folio_core::content::{AboutEntry, DiffSet, ExperienceItem, SiteSettings, SkillItem, WorkItem};
use folio_core::media::{UploadDestination, UploadResult};

use crate::error::ApiError;

/// One file handed to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Filename as picked by the operator.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Persistence and upload operations the admin console performs.
///
/// For the save operations, an absent `id` signals create-intent and a
/// present one update-intent; the request shape is otherwise identical.
/// Nothing here retries or times out beyond what the transport provides.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    /// Save one timeline entry; body is `{ "data": { ...fields } }`.
    async fn save_about(&self, id: Option<&str>, entry: &AboutEntry) -> Result<(), ApiError>;

    /// Save one work item; body is the flat field map plus `resources`,
    /// `logo`, and `images`.
    async fn save_work(&self, id: Option<&str>, work: &WorkItem) -> Result<(), ApiError>;

    /// Apply one experience diff; body is `{ "remove": [...], "add": [...] }`.
    async fn save_experience(&self, diff: &DiffSet<ExperienceItem>) -> Result<(), ApiError>;

    /// Replace the skill collection; body is `{ "values": [...] }`.
    async fn save_skills(&self, values: &[SkillItem]) -> Result<(), ApiError>;

    /// Save the settings singleton; body is `{ "data": { ... } }`.
    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), ApiError>;

    /// Send one multipart batch (`path` + one `photos` part per file) and
    /// return the stored names in server-response order.
    async fn upload(
        &self,
        destination: UploadDestination,
        files: Vec<UploadFile>,
    ) -> Result<Vec<UploadResult>, ApiError>;

    /// End the admin session.
    async fn logout(&self) -> Result<(), ApiError>;
}
