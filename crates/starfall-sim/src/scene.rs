//! Scene: owns the hecs world that spawn instructions are materialized into.

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;
use rand::Rng;

use starfall_core::enums::SpawnCategory;
use starfall_core::spawn::SpawnInstruction;
use starfall_core::types::Bounds;

use crate::components::{Hull, Origin, Position, Radius, Velocity};
use crate::systems;
use crate::systems::cleanup::Removal;

// --- Drift speeds (world units per second, downward) ---

const ASTEROID_SPEED: (f32, f32) = (30.0, 70.0);
const ENEMY_SPEED: (f32, f32) = (60.0, 110.0);
const HAZARD_SPEED: (f32, f32) = (20.0, 40.0);
const PICKUP_SPEED: (f32, f32) = (40.0, 60.0);
const BOSS_SPEED: f32 = 12.0;

/// Sideways drift as a fraction of downward speed.
const MAX_LATERAL_DRIFT: f32 = 0.25;

// --- Hull ---

const ENEMY_HITS: u32 = 2;
const HAZARD_HITS: u32 = 1;
const PICKUP_HITS: u32 = 1;
const BOSS_HITS: u32 = 25;

const DEFAULT_RADIUS: f32 = 10.0;
const BOSS_RADIUS: f32 = 48.0;

pub struct Scene {
    world: World,
    bounds: Bounds,
    despawn_buffer: Vec<Entity>,
    target_buffer: Vec<Entity>,
}

impl Scene {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            world: World::new(),
            bounds,
            despawn_buffer: Vec::new(),
            target_buffer: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Number of live spawns still on the playfield.
    pub fn live_count(&self) -> u32 {
        self.world.query::<&Origin>().iter().count() as u32
    }

    /// Turn an instruction into a live entity entering at the top edge.
    pub fn materialize<R: Rng + ?Sized>(
        &mut self,
        instruction: &SpawnInstruction,
        rng: &mut R,
    ) -> Entity {
        let category = instruction.category();
        let x = if self.bounds.size().x > 0.0 {
            rng.gen_range(self.bounds.min.x..=self.bounds.max.x)
        } else {
            self.bounds.min.x
        };
        let position = Vec2::new(x, self.bounds.max.y);

        let speed = match category {
            SpawnCategory::Asteroid => roll(ASTEROID_SPEED, rng),
            SpawnCategory::Enemy => roll(ENEMY_SPEED, rng),
            SpawnCategory::Hazard => roll(HAZARD_SPEED, rng),
            SpawnCategory::Pickup => roll(PICKUP_SPEED, rng),
            SpawnCategory::Boss => BOSS_SPEED,
        };
        let drift = if category == SpawnCategory::Boss {
            0.0
        } else {
            rng.gen_range(-MAX_LATERAL_DRIFT..=MAX_LATERAL_DRIFT) * speed
        };

        let (hits, radius) = match instruction {
            // Bigger rocks take more hits.
            SpawnInstruction::Asteroid { size, radius } => (size.cost(), *radius),
            SpawnInstruction::Enemy { .. } => (ENEMY_HITS, DEFAULT_RADIUS),
            SpawnInstruction::Hazard { .. } => (HAZARD_HITS, DEFAULT_RADIUS),
            SpawnInstruction::Pickup { .. } => (PICKUP_HITS, DEFAULT_RADIUS),
            SpawnInstruction::Boss { .. } => (BOSS_HITS, BOSS_RADIUS),
        };

        let entity = self.world.spawn((
            Position(position),
            Velocity(Vec2::new(drift, -speed)),
            Radius(radius),
            Hull {
                hits_remaining: hits,
            },
            Origin { category },
        ));
        debug!("Materialized {category:?} at ({:.0}, {:.0})", position.x, position.y);
        entity
    }

    /// Run one frame of scene systems and return what was removed.
    /// Every removed entity must be reported to the director once.
    pub fn step<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R, hits_per_second: f64) -> Removal {
        systems::movement::run(&mut self.world, dt as f32);
        systems::player_fire::run(
            &mut self.world,
            rng,
            dt,
            hits_per_second,
            &mut self.target_buffer,
        );
        systems::cleanup::run(&mut self.world, &self.bounds, &mut self.despawn_buffer)
    }
}

fn roll<R: Rng + ?Sized>((lo, hi): (f32, f32), rng: &mut R) -> f32 {
    rng.gen_range(lo..hi)
}
