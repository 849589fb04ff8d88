//! Aspect Cards Core Library
//!
//! Card catalog, layout, SVG rendering and PNG export for the aspect and
//! nature art cards.
//!
//! ## Pipeline
//!
//! ```text
//! Catalog ─▶ RegionSet (CardFace per card) ─▶ SvgDocument ─▶ Rasterizer ─▶ PNG ─▶ DirectoryHandle
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use aspectcards_core::{Catalog, ExportConfig, Exporter, LocalDirectory, RegionSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::builtin();
//!     let regions = RegionSet::standard(&catalog)?;
//!     let exporter = Exporter::software(ExportConfig::default());
//!
//!     let report = exporter
//!         .export_all(LocalDirectory::shared("./cards-out")?, &regions)
//!         .await;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod directory;
pub mod error;
pub mod export;
pub mod icons;
pub mod layout;
pub mod logging;
pub mod naming;
pub mod raster;
pub mod scale;
pub mod theme;

// Re-exports
pub use catalog::{AspectCard, Catalog, EdgeLabels, NatureArtCard, ANY_ACTION};
pub use config::ExportConfig;
pub use controller::{ExportController, ExportOutcome};
pub use directory::{DirectoryHandle, DirectoryPicker, FixedPicker, LocalDirectory, SharedDirectory};
pub use error::{CardError, CardResult};
pub use export::{BatchReport, ExportFailure, ExportJob, Exporter};
pub use icons::{Icon, IconSet};
pub use layout::{CardFace, ExportRegion, RegionChild, RegionLayout, RegionSet};
pub use raster::{FontLibrary, Rasterizer, SvgDocument, SvgRasterizer};
pub use scale::{export_scale, scaled_size};
pub use theme::{CardStyle, Color};
