//! ECS components attached to materialized spawns.

use glam::Vec2;

use starfall_core::enums::SpawnCategory;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// World units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius(pub f32);

/// Hits left before the entity is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hull {
    pub hits_remaining: u32,
}

/// Marks an entity as realized from a director spawn instruction.
/// Only these are reported back on removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub category: SpawnCategory,
}
