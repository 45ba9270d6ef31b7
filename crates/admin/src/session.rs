//! Shared submit-cycle pieces.

use folio_client::error::ApiError;
use folio_client::gateway::AdminGateway;
use folio_core::status::StatusReporter;

use crate::navigation::Navigator;

/// Where a form stands in its submit cycle.
///
/// `Idle` and `Navigated` are the terminal states: `Idle` is ready for the
/// next edit, `Navigated` means the session is being torn down in favor of
/// a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    /// Validation failed; field errors are populated and nothing was sent.
    Blocked,
    Submitting,
    Navigated,
}

/// Route a save outcome to the status slot.
///
/// Success shows the form's canned copy; failure shows the error's literal
/// rendering (`status - statusText` for API rejections). Returns whether
/// the save succeeded so callers can run their own follow-up (navigation,
/// snapshot restore).
pub(crate) fn report_save(
    status: &mut StatusReporter,
    result: &Result<(), ApiError>,
    success_copy: &str,
) -> bool {
    match result {
        Ok(()) => {
            status.success(success_copy);
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Save failed");
            status.error(e.to_string());
            false
        }
    }
}

/// End the admin session: one GET to the logout endpoint, then the login
/// page. A failed logout routes nowhere and surfaces nothing -- the menu
/// action simply has no effect, matching the production console.
pub async fn logout(gateway: &dyn AdminGateway, navigator: &mut Navigator) {
    match gateway.logout().await {
        Ok(()) => navigator.go_to_login(),
        Err(e) => tracing::warn!(error = %e, "Logout failed"),
    }
}
