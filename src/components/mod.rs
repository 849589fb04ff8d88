//! UI Components for Aspect Cards.

pub mod cards;
mod export_controls;

pub use cards::RegionView;
pub use export_controls::ExportControls;
