//! Export session controller.
//!
//! Holds the directory chosen during this session and drives the two user
//! actions: "choose directory" (pick, then export) and "save" (export again
//! into the chosen directory). Only one action runs at a time; an action
//! started while another is in flight is rejected with
//! [`ExportOutcome::Busy`], not queued.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::directory::{DirectoryPicker, SharedDirectory};
use crate::export::{BatchReport, Exporter};
use crate::layout::RegionSet;

/// Terminal state of a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The picker was dismissed; nothing changed
    Cancelled,
    /// Another action is still running
    Busy,
    /// "save" before any directory was chosen
    NoDirectory,
    /// The picker returned a directory that cannot be used
    Failed(String),
    /// A batch ran (possibly with failures)
    Completed(BatchReport),
}

#[derive(Debug, Default)]
struct SessionState {
    directory: Option<SharedDirectory>,
    busy: bool,
}

/// Clears the busy flag when the action ends, including by panic.
struct BusyGuard {
    state: Arc<Mutex<SessionState>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.state.lock().busy = false;
    }
}

/// Cheaply cloneable handle to the session.
#[derive(Clone)]
pub struct ExportController {
    state: Arc<Mutex<SessionState>>,
    exporter: Exporter,
    regions: Arc<RegionSet>,
}

impl std::fmt::Debug for ExportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportController")
            .field("state", &*self.state.lock())
            .field("exporter", &self.exporter)
            .finish_non_exhaustive()
    }
}

impl ExportController {
    pub fn new(exporter: Exporter, regions: RegionSet) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            exporter,
            regions: Arc::new(regions),
        }
    }

    /// Directory chosen in this session, if any.
    pub fn directory(&self) -> Option<SharedDirectory> {
        self.state.lock().directory.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().busy
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    fn try_begin(&self) -> Option<BusyGuard> {
        let mut state = self.state.lock();
        if state.busy {
            return None;
        }
        state.busy = true;
        Some(BusyGuard {
            state: self.state.clone(),
        })
    }

    /// Ask for a directory, remember it, then export into it.
    ///
    /// The picker runs on the blocking pool since native dialogs block.
    pub async fn choose_directory(&self, picker: Arc<dyn DirectoryPicker>) -> ExportOutcome {
        let Some(_guard) = self.try_begin() else {
            debug!("Choose directory ignored, export in progress");
            return ExportOutcome::Busy;
        };

        let picked = match tokio::task::spawn_blocking(move || picker.pick_directory()).await {
            Ok(Ok(picked)) => picked,
            Ok(Err(e)) => {
                error!("Chosen directory is unusable: {}", e);
                return ExportOutcome::Failed(e.to_string());
            }
            Err(e) => {
                error!("Directory picker failed: {}", e);
                return ExportOutcome::Failed(format!("directory picker failed: {}", e));
            }
        };

        let Some(directory) = picked else {
            debug!("Directory selection cancelled");
            return ExportOutcome::Cancelled;
        };

        info!(directory = %directory.display_name(), "Directory chosen");
        self.state.lock().directory = Some(directory.clone());

        ExportOutcome::Completed(self.exporter.export_all(directory, &self.regions).await)
    }

    /// Export again into the directory chosen earlier.
    pub async fn save(&self) -> ExportOutcome {
        let Some(directory) = self.directory() else {
            return ExportOutcome::NoDirectory;
        };
        let Some(_guard) = self.try_begin() else {
            debug!("Save ignored, export in progress");
            return ExportOutcome::Busy;
        };

        ExportOutcome::Completed(self.exporter.export_all(directory, &self.regions).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::ExportConfig;
    use crate::directory::{FixedPicker, LocalDirectory};
    use crate::error::{CardError, CardResult};
    use tempfile::TempDir;

    struct BrokenPicker;

    impl DirectoryPicker for BrokenPicker {
        fn pick_directory(&self) -> CardResult<Option<SharedDirectory>> {
            Err(CardError::InvalidFileName("read-only volume".to_string()))
        }
    }

    fn controller() -> ExportController {
        ExportController::new(
            Exporter::software(ExportConfig::default()),
            RegionSet::standard(&Catalog::builtin()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_save_without_directory() {
        assert_eq!(controller().save().await, ExportOutcome::NoDirectory);
    }

    #[tokio::test]
    async fn test_cancelled_picker_changes_nothing() {
        let controller = controller();
        let outcome = controller
            .choose_directory(Arc::new(FixedPicker::cancelled()))
            .await;

        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert!(controller.directory().is_none());
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_picker_error_is_reported() {
        let controller = controller();
        let outcome = controller.choose_directory(Arc::new(BrokenPicker)).await;

        match outcome {
            ExportOutcome::Failed(message) => assert!(message.contains("read-only volume"), "{}", message),
            other => panic!("expected a failure, got {:?}", other),
        }
        assert!(controller.directory().is_none());
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_choose_then_save() {
        let temp = TempDir::new().unwrap();
        let controller = controller();
        let picker = FixedPicker::new(LocalDirectory::shared(temp.path()).unwrap());

        let first = controller.choose_directory(Arc::new(picker)).await;
        assert!(matches!(first, ExportOutcome::Completed(ref r) if r.is_success()));
        assert!(controller.directory().is_some());

        let second = controller.save().await;
        assert!(matches!(second, ExportOutcome::Completed(ref r) if r.is_success()));
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_busy_guard_rejects_second_action() {
        let controller = controller();
        let guard = controller.try_begin().unwrap();
        assert!(controller.is_busy());
        assert!(controller.try_begin().is_none());
        drop(guard);
        assert!(!controller.is_busy());
    }
}
