//! Directory-scoped file writer and directory picker.
//!
//! A [`DirectoryHandle`] is a capability over one directory: it can write
//! files directly inside it and open (creating on demand) direct
//! sub-directories, nothing else. Handles are shared read-only by every
//! export job of a batch.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{CardError, CardResult};

/// Shared directory capability.
pub type SharedDirectory = Arc<dyn DirectoryHandle>;

/// Writable location granted by the user.
pub trait DirectoryHandle: Send + Sync + Debug {
    /// Human-readable location (shown in notifications and logs).
    fn display_name(&self) -> String;

    /// Create or overwrite `name` with `bytes`.
    fn write_file(&self, name: &str, bytes: &[u8]) -> CardResult<()>;

    /// Open the sub-directory `name`, creating it when missing.
    fn directory(&self, name: &str) -> CardResult<SharedDirectory>;
}

/// Source of directory handles (e.g. a native folder dialog).
pub trait DirectoryPicker: Send + Sync {
    /// Ask for a directory. `Ok(None)` means the user cancelled; an error
    /// means a directory was chosen but cannot be used.
    fn pick_directory(&self) -> CardResult<Option<SharedDirectory>>;
}

/// Directory on the local file system.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    /// Open `root`, creating it when missing.
    pub fn open(root: impl Into<PathBuf>) -> CardResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn shared(root: impl Into<PathBuf>) -> CardResult<SharedDirectory> {
        Ok(Arc::new(Self::open(root)?))
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl DirectoryHandle for LocalDirectory {
    fn display_name(&self) -> String {
        self.root.display().to_string()
    }

    fn write_file(&self, name: &str, bytes: &[u8]) -> CardResult<()> {
        check_entry_name(name)?;
        let path = self.root.join(name);
        debug!(path = %path.display(), bytes = bytes.len(), "Writing file");
        fs::write(path, bytes)?;
        Ok(())
    }

    fn directory(&self, name: &str) -> CardResult<SharedDirectory> {
        check_entry_name(name)?;
        Ok(Arc::new(LocalDirectory::open(self.root.join(name))?))
    }
}

/// Reject names that would leave the granted directory.
pub fn check_entry_name(name: &str) -> CardResult<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(CardError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

/// Picker that always returns the same pre-chosen directory (CLI, tests).
#[derive(Debug, Clone)]
pub struct FixedPicker {
    directory: Option<SharedDirectory>,
}

impl FixedPicker {
    pub fn new(directory: SharedDirectory) -> Self {
        Self {
            directory: Some(directory),
        }
    }

    /// Picker that behaves like a dismissed dialog.
    pub fn cancelled() -> Self {
        Self { directory: None }
    }
}

impl DirectoryPicker for FixedPicker {
    fn pick_directory(&self) -> CardResult<Option<SharedDirectory>> {
        Ok(self.directory.clone())
    }
}
