//! Cleanup system: removes spawns that were destroyed or left the playfield.

use hecs::{Entity, World};

use starfall_core::types::Bounds;

use crate::components::{Hull, Origin, Position};

/// Entities removed by one cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removal {
    /// Shot down by the player.
    pub destroyed: u32,
    /// Drifted out of bounds.
    pub escaped: u32,
}

impl Removal {
    pub fn total(&self) -> u32 {
        self.destroyed + self.escaped
    }
}

/// Despawn finished spawns. Uses a pre-allocated buffer to avoid per-frame
/// allocation.
pub fn run(world: &mut World, bounds: &Bounds, despawn_buffer: &mut Vec<Entity>) -> Removal {
    despawn_buffer.clear();
    let mut removal = Removal::default();

    for (entity, (pos, hull, _origin)) in world.query_mut::<(&Position, &Hull, &Origin)>() {
        if hull.hits_remaining == 0 {
            removal.destroyed += 1;
            despawn_buffer.push(entity);
        } else if !bounds.contains(pos.0) {
            removal.escaped += 1;
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removal
}
