//! Planned spawn entries and the resolved instructions handed to the scene.

use serde::{Deserialize, Serialize};

use crate::enums::{AsteroidSize, SpawnCategory};

/// One planned, not-yet-materialized encounter element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpawnEntry {
    Asteroid { size: AsteroidSize },
    Enemy { kind: String },
    Hazard { kind: String },
    Pickup { kind: String },
    Boss { id: String },
}

impl SpawnEntry {
    pub fn category(&self) -> SpawnCategory {
        match self {
            SpawnEntry::Asteroid { .. } => SpawnCategory::Asteroid,
            SpawnEntry::Enemy { .. } => SpawnCategory::Enemy,
            SpawnEntry::Hazard { .. } => SpawnCategory::Hazard,
            SpawnEntry::Pickup { .. } => SpawnCategory::Pickup,
            SpawnEntry::Boss { .. } => SpawnCategory::Boss,
        }
    }

    /// Budget units this entry spent. Bosses are free.
    pub fn cost(&self) -> u32 {
        match self {
            SpawnEntry::Asteroid { size } => size.cost(),
            SpawnEntry::Boss { .. } => 0,
            other => other.category().flat_cost().unwrap_or(0),
        }
    }

    /// Resolve into a caller-facing instruction. The asteroid radius is
    /// supplied here so every spawn rolls a fresh one.
    pub fn into_instruction(self, radius: impl FnOnce(AsteroidSize) -> f32) -> SpawnInstruction {
        match self {
            SpawnEntry::Asteroid { size } => SpawnInstruction::Asteroid {
                size,
                radius: radius(size),
            },
            SpawnEntry::Enemy { kind } => SpawnInstruction::Enemy { kind },
            SpawnEntry::Hazard { kind } => SpawnInstruction::Hazard { kind },
            SpawnEntry::Pickup { kind } => SpawnInstruction::Pickup { kind },
            SpawnEntry::Boss { id } => SpawnInstruction::Boss { id },
        }
    }
}

/// Spawn payload emitted by the wave director, ready to be materialized
/// into a live entity by the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpawnInstruction {
    Asteroid { size: AsteroidSize, radius: f32 },
    Enemy { kind: String },
    Hazard { kind: String },
    Pickup { kind: String },
    Boss { id: String },
}

impl SpawnInstruction {
    pub fn category(&self) -> SpawnCategory {
        match self {
            SpawnInstruction::Asteroid { .. } => SpawnCategory::Asteroid,
            SpawnInstruction::Enemy { .. } => SpawnCategory::Enemy,
            SpawnInstruction::Hazard { .. } => SpawnCategory::Hazard,
            SpawnInstruction::Pickup { .. } => SpawnCategory::Pickup,
            SpawnInstruction::Boss { .. } => SpawnCategory::Boss,
        }
    }
}
