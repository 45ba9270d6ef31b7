//! Media slots for the work form.
//!
//! A work item carries one logo slot and an ordered image gallery. Upload
//! batches come back as stored filenames; merging them is pure list work,
//! the actual transfer lives in the client crate.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Destinations
// ---------------------------------------------------------------------------

/// Where an upload batch lands, encoded as the `path` field of the upload
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDestination {
    /// The single-slot logo destination.
    Logos,
    /// The appended image gallery (the bucket root).
    Images,
}

impl UploadDestination {
    /// The destination prefix string the upload endpoint expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logos => "logos/",
            Self::Images => "",
        }
    }
}

impl std::fmt::Display for UploadDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Upload results
// ---------------------------------------------------------------------------

/// One stored file, as reported by the upload endpoint.
///
/// Results arrive in the order the server chooses; assumed, but not
/// guaranteed, to match submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// The stored filename under the destination prefix.
    pub originalname: String,
}

// ---------------------------------------------------------------------------
// MediaSet
// ---------------------------------------------------------------------------

/// The work form's local view of its stored media.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSet {
    pub logo: Option<String>,
    pub images: Vec<String>,
}

impl MediaSet {
    pub fn new(logo: Option<String>, images: Vec<String>) -> Self {
        Self { logo, images }
    }

    /// Merge one upload batch.
    ///
    /// The logo destination overwrites the single slot per result, so the
    /// last result wins; any other destination appends every stored name in
    /// response order.
    pub fn apply_uploads(&mut self, destination: UploadDestination, results: &[UploadResult]) {
        for result in results {
            match destination {
                UploadDestination::Logos => self.logo = Some(result.originalname.clone()),
                UploadDestination::Images => self.images.push(result.originalname.clone()),
            }
        }
    }

    /// Drop one gallery image locally; the store only learns about it at
    /// the next save. Out-of-bounds indices are a no-op.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }
}
