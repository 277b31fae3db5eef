//! Stand-in for the player's guns: lands hits on random live spawns at a
//! fixed average rate.

use hecs::{Entity, World};
use rand::Rng;

use crate::components::{Hull, Origin};

/// Roll for one hit this frame. Returns the entity that was hit, if any.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    dt: f64,
    hits_per_second: f64,
    targets: &mut Vec<Entity>,
) -> Option<Entity> {
    let chance = (hits_per_second * dt).clamp(0.0, 1.0);
    if rng.gen::<f64>() >= chance {
        return None;
    }

    targets.clear();
    for (entity, (hull, _origin)) in world.query_mut::<(&Hull, &Origin)>() {
        if hull.hits_remaining > 0 {
            targets.push(entity);
        }
    }
    if targets.is_empty() {
        return None;
    }

    let target = targets[rng.gen_range(0..targets.len())];
    if let Ok(mut hull) = world.get::<&mut Hull>(target) {
        hull.hits_remaining = hull.hits_remaining.saturating_sub(1);
    }
    Some(target)
}
