//! Export settings.
//!
//! Values come from command-line flags; there is no configuration file.

use std::path::PathBuf;

use crate::scale::DEFAULT_TARGET_MAX_DIMENSION;

/// Sub-directory that receives one file per card of the composite region.
pub const DEFAULT_CARDS_DIR: &str = "cards";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Longest allowed side of any exported image, in pixels
    pub target_max_dimension: u32,
    /// Sub-directory for per-card files
    pub cards_dir: String,
    /// Font directories searched in addition to the system fonts
    pub font_dirs: Vec<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            target_max_dimension: DEFAULT_TARGET_MAX_DIMENSION,
            cards_dir: DEFAULT_CARDS_DIR.to_string(),
            font_dirs: Vec::new(),
        }
    }
}

impl ExportConfig {
    /// Override the size cap. Zero is raised to one pixel.
    pub fn with_target_max_dimension(mut self, target: u32) -> Self {
        self.target_max_dimension = target.max(1);
        self
    }

    pub fn with_cards_dir(mut self, name: impl Into<String>) -> Self {
        self.cards_dir = name.into();
        self
    }

    pub fn with_font_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.font_dirs.extend(dirs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.target_max_dimension, 3000);
        assert_eq!(config.cards_dir, "cards");
        assert!(config.font_dirs.is_empty());
    }

    #[test]
    fn test_font_dirs_accumulate() {
        let config = ExportConfig::default()
            .with_font_dirs([PathBuf::from("/a")])
            .with_font_dirs([PathBuf::from("/b")]);
        assert_eq!(config.font_dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_zero_target_raised() {
        let config = ExportConfig::default().with_target_max_dimension(0);
        assert_eq!(config.target_max_dimension, 1);
    }
}
