//! The per-session status slot.
//!
//! Every admin form owns exactly one of these: a single success/error
//! surface the operator can dismiss. Dismissal only hides the slot -- the
//! last message stays cached, so re-showing before the next overwrite can
//! briefly flash stale copy. That matches the production surface and is
//! left as-is.

use serde::{Deserialize, Serialize};

/// How a status message renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-slot status surface scoped to one form session.
#[derive(Debug, Clone, Default)]
pub struct StatusReporter {
    visible: bool,
    severity: Severity,
    message: String,
}

impl StatusReporter {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Overwrite the slot and make it visible.
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.severity = severity;
        self.message = message.into();
        self.visible = true;
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(Severity::Error, message);
    }

    /// Hide the slot. The message is intentionally kept.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_overwrites_and_reveals() {
        let mut status = StatusReporter::default();
        assert!(!status.is_visible());

        status.success("Success! Your skills have been saved");

        assert!(status.is_visible());
        assert_eq!(status.severity(), Severity::Success);
        assert_eq!(status.message(), "Success! Your skills have been saved");

        status.error("500 - Internal Server Error");
        assert_eq!(status.severity(), Severity::Error);
        assert_eq!(status.message(), "500 - Internal Server Error");
    }

    #[test]
    fn dismiss_hides_but_keeps_message() {
        let mut status = StatusReporter::default();
        status.error("500 - Internal Server Error");

        status.dismiss();

        assert!(!status.is_visible());
        assert_eq!(status.message(), "500 - Internal Server Error");
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Error).expect("serialization should succeed"),
            "\"error\""
        );
        assert_eq!(Severity::Success.as_str(), "success");
    }
}
