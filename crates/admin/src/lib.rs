//! Form sessions for the folio admin console.
//!
//! One session per admin view: it owns the edited content, runs the
//! validation schema, orchestrates uploads and saves through the gateway,
//! and routes every outcome to its status slot (and, on a successful
//! create, to the navigator). Sessions are built on view entry and dropped
//! on exit; nothing is shared between them.

pub mod forms;
pub mod navigation;
pub mod session;
