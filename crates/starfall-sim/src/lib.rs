//! Headless scene for STARFALL.
//!
//! Plays the role of the rendering/collision collaborator: materializes
//! spawn instructions as hecs entities, moves and destroys them, and
//! reports every removal back to the wave director. Used by the zone
//! runner and by end-to-end tests.

pub mod components;
pub mod scene;
pub mod session;
pub mod systems;

pub use scene::Scene;
pub use session::{SessionConfig, SessionReport, ZoneSession};
pub use starfall_core as core;
