//! Native folder dialog.

use aspectcards_core::{CardResult, DirectoryPicker, LocalDirectory, SharedDirectory};
use rfd::FileDialog;

/// Picks the export directory with the platform folder dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdPicker;

impl DirectoryPicker for RfdPicker {
    fn pick_directory(&self) -> CardResult<Option<SharedDirectory>> {
        let Some(path) = FileDialog::new()
            .set_title("Choose export directory")
            .pick_folder()
        else {
            return Ok(None);
        };

        LocalDirectory::shared(&path).map(Some).map_err(|e| {
            tracing::error!(path = %path.display(), "Cannot use directory: {}", e);
            e
        })
    }
}
