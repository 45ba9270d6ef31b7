//! Content document types shared across the admin forms.
//!
//! These mirror the documents held by the store. Identifiers are present
//! only on persisted documents (`_id`), never on items the operator has
//! just typed in.

use serde::{Deserialize, Serialize};

use crate::types::DocId;

/// A single portfolio project.
///
/// `weight` is the operator-supplied sort key; the read path orders the
/// work listing by it. `logo` holds one stored filename, `images` an
/// ordered gallery of stored filenames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub git: String,
    pub weight: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// One experience badge: a display name plus an icon-font class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,
    pub name: String,
    pub icon: String,
}

impl ExperienceItem {
    /// An unsaved badge, as produced by the add-experience input.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A named skill with a proficiency percentage.
///
/// `percent` is always a multiple of 5 within `[0, 100]`; see
/// [`crate::skills`] for the snapping rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,
    pub name: String,
    pub percent: i64,
}

/// One entry on the about-page timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,
    pub year_from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Site-wide settings: a singleton document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub email: String,
}

/// The transient payload produced by one submit of a list-style form.
///
/// Never persisted as its own entity; it exists only between
/// [`crate::diff::ExperienceTracker::commit`] and the persistence call.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffSet<T> {
    pub added: Vec<T>,
    pub removed: Vec<T>,
}

impl<T> DiffSet<T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
