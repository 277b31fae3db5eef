//! Wave scheduling for STARFALL.
//!
//! Builds budget-driven spawn plans from a zone's palettes and runs the
//! `WaveDirector` state machine that hands them out frame by frame.

pub mod composer;
pub mod director;
pub mod spawn_plan;

pub use composer::WaveDefinition;
pub use director::{AnnounceFn, DirectorSnapshot, WaveDirector};
pub use starfall_core as core;
