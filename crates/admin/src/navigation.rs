//! Post-save navigation.

// ---------------------------------------------------------------------------
// Entity kinds
// ---------------------------------------------------------------------------

/// The admin-managed content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    About,
    Work,
    Experience,
    Skills,
    Settings,
}

impl EntityKind {
    /// The listing view for this collection. Settings is the admin index
    /// itself; experience and skills never navigate after a save.
    pub fn listing_path(&self) -> &'static str {
        match self {
            Self::About => "/admin/about",
            Self::Work => "/admin/work",
            Self::Experience => "/admin/experience",
            Self::Skills => "/admin/skills",
            Self::Settings => "/admin",
        }
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Records where the session should route next.
///
/// Stateless beyond the recorded target: a redirect fires only after a
/// successful create (never an update), plus the login page after logout.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    target: Option<String>,
}

impl Navigator {
    /// Route to a collection's listing view.
    pub fn go_to_listing(&mut self, entity: EntityKind) {
        let path = entity.listing_path();
        tracing::info!(path, "Navigating to listing");
        self.target = Some(path.to_string());
    }

    /// Route to the login page (after logout).
    pub fn go_to_login(&mut self) {
        self.target = Some("/login".to_string());
    }

    /// The pending redirect, if a navigation has been recorded.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
