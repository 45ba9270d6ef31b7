//! The media upload job.
//!
//! One job is one batched multipart request: every picked file plus the
//! destination prefix travels in a single POST, so a batch either applies
//! completely or not at all. The job is an explicit state machine; the
//! session reads the outcome off the final state rather than out of
//! callbacks.

use folio_core::media::{UploadDestination, UploadResult};

use crate::gateway::{AdminGateway, UploadFile};

/// Lifecycle of one upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadJob {
    /// Files picked, request not yet issued.
    Pending(Vec<UploadFile>),
    /// The batched request is on the wire.
    InFlight,
    /// All files stored; results are in server-response order.
    Succeeded(Vec<UploadResult>),
    /// The batch failed as a whole; no partial result exists.
    Failed(String),
}

impl UploadJob {
    /// A new job holding the picked files.
    pub fn new(files: Vec<UploadFile>) -> Self {
        Self::Pending(files)
    }

    /// Issue the batch through the gateway and resolve to a terminal state.
    ///
    /// Running anything but a `Pending` job returns it unchanged; a job is
    /// not restartable once resolved.
    pub async fn run(self, gateway: &dyn AdminGateway, destination: UploadDestination) -> Self {
        let files = match self {
            Self::Pending(files) => files,
            other => return other,
        };

        match gateway.upload(destination, files).await {
            Ok(results) => Self::Succeeded(results),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_is_pending_and_not_terminal() {
        let job = UploadJob::new(vec![UploadFile::new("a.png", "image/png", vec![1, 2, 3])]);
        assert!(matches!(job, UploadJob::Pending(ref files) if files.len() == 1));
        assert!(!job.is_terminal());
    }

    #[test]
    fn resolved_states_are_terminal() {
        assert!(UploadJob::Succeeded(vec![]).is_terminal());
        assert!(UploadJob::Failed("boom".into()).is_terminal());
        assert!(!UploadJob::InFlight.is_terminal());
    }
}
