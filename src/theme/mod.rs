//! Styles for the desktop UI.

mod styles;

pub use styles::GLOBAL_STYLES;
