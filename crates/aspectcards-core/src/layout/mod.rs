//! Card layout: resolved card faces and the regions they are grouped into.

pub mod card;
pub mod region;

pub use card::{
    art_tag, aspect_tag, CardFace, EdgeLabels, FrontFace, Overlay, Section, TextBlock, TextSize,
    CARD_BORDER, CARD_HEIGHT, CARD_RADIUS, CARD_WIDTH,
};
pub use region::{
    ExportRegion, RegionChild, RegionLayout, RegionSet, ARTS_FILE, CARD_GAP, COMBINED_FILE,
    GRID_COLUMNS, PREVIEW_FILE, SPLIT_FILE,
};
