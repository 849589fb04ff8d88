//! Error types for Aspect Cards

use thiserror::Error;

/// Main error type for catalog, layout and export operations
#[derive(Error, Debug)]
pub enum CardError {
    /// General I/O error (directory creation, file writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SVG document could not be parsed
    #[error("SVG error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// PNG encoding or pixel buffer error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Catalog file could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog parsed but violates a consistency rule
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two siblings in one region derive the same file name
    #[error("Duplicate file name in region '{region}': {name}")]
    DuplicateFileName { region: String, name: String },

    /// File or directory name escapes the directory capability
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Rasterization failed for a reason other than parsing or encoding
    #[error("Raster error: {0}")]
    Raster(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::DuplicateFileName {
            region: "split".to_string(),
            name: "aggression-strike".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Duplicate file name in region 'split': aggression-strike"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
