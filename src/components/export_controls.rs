//! Export buttons, busy indicator and outcome notices.

use std::path::PathBuf;
use std::sync::Arc;

use aspectcards_core::ExportOutcome;
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::context::{outcome_message, use_export_state, use_session};
use crate::picker::RfdPicker;

/// "choose directory" and "save" buttons.
///
/// Both are replaced by a busy indicator while a batch runs. "save" only
/// appears once a directory was chosen in this session.
#[component]
pub fn ExportControls() -> Element {
    let session = use_session();
    let mut state = use_export_state();

    let Some(session) = session else {
        return rsx! {
            div { class: "export-controls",
                span { class: "export-error", "Export unavailable" }
            }
        };
    };

    let choose_session = session.clone();
    let choose = move |_| {
        let session = choose_session.clone();
        state.write().begin();
        spawn(async move {
            let outcome = session.controller.choose_directory(Arc::new(RfdPicker)).await;
            state.write().finish(&session.controller);
            notify(outcome, session.log_path.clone()).await;
        });
    };

    let save = move |_| {
        let session = session.clone();
        state.write().begin();
        spawn(async move {
            let outcome = session.controller.save().await;
            state.write().finish(&session.controller);
            notify(outcome, session.log_path.clone()).await;
        });
    };

    let current = state();

    rsx! {
        div { class: "export-controls",
            if current.busy {
                div { class: "export-busy",
                    span { class: "export-busy__spinner" }
                    "Exporting..."
                }
            } else {
                button { class: "btn-export", onclick: choose, "Choose directory" }
                if let Some(directory) = current.directory {
                    button {
                        class: "btn-export btn-export--primary",
                        title: "{directory}",
                        onclick: save,
                        "Save"
                    }
                }
            }
        }
    }
}

/// Show the outcome in a native alert.
async fn notify(outcome: ExportOutcome, log_path: Option<PathBuf>) {
    let Some(message) = outcome_message(&outcome, log_path.as_ref()) else {
        return;
    };
    let level = match &outcome {
        ExportOutcome::Failed(_) => MessageLevel::Error,
        ExportOutcome::Completed(report) if !report.is_success() => MessageLevel::Error,
        _ => MessageLevel::Info,
    };

    // Blocking dialog, so keep it off the UI thread
    let shown = tokio::task::spawn_blocking(move || {
        MessageDialog::new()
            .set_level(level)
            .set_title("Aspect Cards")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show()
    })
    .await;

    if let Err(e) = shown {
        tracing::error!("Notification dialog failed: {}", e);
    }
}
