//! `reqwest`-backed implementation of the admin gateway.

use std::time::Duration;

use async_trait::async_trait;

use folio_core::content::{AboutEntry, DiffSet, ExperienceItem, SiteSettings, SkillItem, WorkItem};
use folio_core::media::{UploadDestination, UploadResult};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::gateway::{AdminGateway, UploadFile};

/// HTTP client for the portfolio admin API.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest HTTP client");

        Self::with_client(client, config.base_url.clone())
    }

    /// Create a gateway reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL for a collection save. Creates post to the bare collection
    /// path; updates append the identifier segment.
    fn save_url(&self, collection: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/api/admin/{}/{}", self.base_url, collection, id),
            None => format!("{}/api/admin/{}", self.base_url, collection),
        }
    }

    async fn post_json(&self, url: String, body: &serde_json::Value) -> Result<(), ApiError> {
        tracing::debug!(url = %url, "Posting admin payload");
        let response = self.client.post(&url).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Map a non-2xx response to [`ApiError::Status`], discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await.map(|_| ())
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            tracing::warn!(status = status.as_u16(), "Admin API returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AdminGateway for HttpGateway {
    async fn save_about(&self, id: Option<&str>, entry: &AboutEntry) -> Result<(), ApiError> {
        let body = serde_json::json!({ "data": entry });
        self.post_json(self.save_url("about", id), &body).await
    }

    async fn save_work(&self, id: Option<&str>, work: &WorkItem) -> Result<(), ApiError> {
        let body = serde_json::to_value(work).expect("WorkItem is always serialisable");
        self.post_json(self.save_url("work", id), &body).await
    }

    async fn save_experience(&self, diff: &DiffSet<ExperienceItem>) -> Result<(), ApiError> {
        let body = serde_json::json!({
            "remove": &diff.removed,
            "add": &diff.added,
        });
        self.post_json(format!("{}/api/admin/experience", self.base_url), &body)
            .await
    }

    async fn save_skills(&self, values: &[SkillItem]) -> Result<(), ApiError> {
        let body = serde_json::json!({ "values": values });
        self.post_json(format!("{}/api/admin/skills", self.base_url), &body)
            .await
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), ApiError> {
        let body = serde_json::json!({ "data": settings });
        self.post_json(format!("{}/api/admin/settings", self.base_url), &body)
            .await
    }

    async fn upload(
        &self,
        destination: UploadDestination,
        files: Vec<UploadFile>,
    ) -> Result<Vec<UploadResult>, ApiError> {
        let mut form = reqwest::multipart::Form::new().text("path", destination.as_str());

        let count = files.len();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part("photos", part);
        }

        tracing::debug!(destination = %destination, count, "Uploading media batch");

        let response = self
            .client
            .post(format!("{}/api/admin/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(format!("{}/api/admin/logout", self.base_url))
            .send()
            .await?;
        Self::check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base: &str) -> HttpGateway {
        HttpGateway::with_client(reqwest::Client::new(), base.to_string())
    }

    #[test]
    fn save_url_distinguishes_create_and_update() {
        let gw = gateway("http://localhost:3000");

        assert_eq!(
            gw.save_url("work", None),
            "http://localhost:3000/api/admin/work"
        );
        assert_eq!(
            gw.save_url("work", Some("64ac2f9e13b1a0d2c8e77a01")),
            "http://localhost:3000/api/admin/work/64ac2f9e13b1a0d2c8e77a01"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let gw = gateway("http://localhost:3000/");
        assert_eq!(
            gw.save_url("about", None),
            "http://localhost:3000/api/admin/about"
        );
    }
}
