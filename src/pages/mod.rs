//! Page components for Aspect Cards.

mod workbench;

pub use workbench::Workbench;
