//! Enumeration types used throughout the progression core.

use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_COST, HAZARD_COST, PICKUP_COST};
use crate::types::RadiusRange;

/// Wave director phase. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavePhase {
    /// Waiting for the next wave's spawns to begin.
    #[default]
    Lull,
    /// Emitting the current wave's spawn plan.
    Spawning,
    /// Plan exhausted, waiting for every spawned entity to be destroyed.
    Clearing,
    /// All waves cleared. Terminal.
    Complete,
}

/// Asteroid size category, rolled at plan-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    /// Budget units spent on an asteroid of this size.
    pub fn cost(self) -> u32 {
        match self {
            AsteroidSize::Small => 1,
            AsteroidSize::Medium => 2,
            AsteroidSize::Large => 3,
        }
    }

    /// Radius band for this size: the zone range split in three equal
    /// consecutive bands, smallest first.
    pub fn radius_band(self, range: &RadiusRange) -> (f32, f32) {
        let span = (range.max - range.min).max(0.0) / 3.0;
        let lo = match self {
            AsteroidSize::Small => range.min,
            AsteroidSize::Medium => range.min + span,
            AsteroidSize::Large => range.min + span * 2.0,
        };
        (lo, lo + span)
    }
}

/// Encounter category of a spawn entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpawnCategory {
    Asteroid,
    Enemy,
    Hazard,
    Pickup,
    Boss,
}

impl SpawnCategory {
    /// Budget cost of the category, for categories with a flat cost.
    /// Asteroids are priced by size and bosses ignore the budget.
    pub fn flat_cost(self) -> Option<u32> {
        match self {
            SpawnCategory::Enemy => Some(ENEMY_COST),
            SpawnCategory::Hazard => Some(HAZARD_COST),
            SpawnCategory::Pickup => Some(PICKUP_COST),
            SpawnCategory::Asteroid | SpawnCategory::Boss => None,
        }
    }
}
