//! Export session context for Aspect Cards.
//!
//! Provides the export controller and the UI-facing export state to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! let mut state = use_export_state();
//!
//! if let Some(session) = session {
//!     let outcome = session.controller.save().await;
//!     state.write().finish(&session.controller);
//! }
//! ```

use std::path::PathBuf;

use aspectcards_core::{ExportController, ExportOutcome};
use dioxus::prelude::*;

/// Everything the UI needs to run exports.
#[derive(Clone, Debug)]
pub struct DesktopSession {
    pub controller: ExportController,
    /// Diagnostics file named in failure notices
    pub log_path: Option<PathBuf>,
}

/// Reactive mirror of the controller state.
///
/// The controller is the source of truth; this copy only drives rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportState {
    pub busy: bool,
    /// Display name of the chosen directory
    pub directory: Option<String>,
}

impl ExportState {
    pub fn begin(&mut self) {
        self.busy = true;
    }

    /// Record the end of an action and the directory it left selected.
    pub fn finish(&mut self, controller: &ExportController) {
        self.busy = false;
        self.directory = controller.directory().map(|d| d.display_name());
    }
}

/// Hook to access the session created at startup.
pub fn use_session() -> Option<DesktopSession> {
    use_context::<Option<DesktopSession>>()
}

/// Hook to access the reactive export state.
pub fn use_export_state() -> Signal<ExportState> {
    use_context::<Signal<ExportState>>()
}

/// Message shown to the user once an action settles, `None` when there is
/// nothing to report.
pub fn outcome_message(outcome: &ExportOutcome, log_path: Option<&PathBuf>) -> Option<String> {
    match outcome {
        ExportOutcome::Cancelled | ExportOutcome::Busy => None,
        ExportOutcome::NoDirectory => Some("Choose a directory first.".to_string()),
        ExportOutcome::Failed(error) => {
            let mut message = format!("Cannot export to the chosen directory: {}", error);
            if let Some(path) = log_path {
                message.push_str(&format!("\n\nSee the log for details:\n{}", path.display()));
            }
            Some(message)
        }
        ExportOutcome::Completed(report) if report.is_success() => Some(report.summary()),
        ExportOutcome::Completed(report) => {
            let mut message = report.summary();
            if let Some(path) = log_path {
                message.push_str(&format!("\n\nSee the log for details:\n{}", path.display()));
            }
            Some(message)
        }
    }
}
