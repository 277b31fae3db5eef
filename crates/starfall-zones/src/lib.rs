//! Zone definitions for STARFALL: the built-in catalog and JSON zone files.

pub mod catalog;
pub mod loader;

pub use catalog::ZoneId;
pub use loader::{load_zone, parse_zone, ZoneLoadError};
