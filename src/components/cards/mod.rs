//! Card rendering
//!
//! Regions are shown as the same SVG documents the exporter rasterizes.

mod region_view;

pub use region_view::RegionView;
