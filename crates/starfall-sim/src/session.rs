//! Zone session: drives a wave director and a scene frame by frame.
//!
//! Call order per frame: `advance()` first, then the scene step, then one
//! `entity_destroyed()` per removed entity. Completely headless, so a whole
//! zone can be played out in tests.

use std::collections::BTreeMap;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starfall_core::enums::SpawnCategory;
use starfall_core::types::ZoneConfig;
use starfall_waves::{AnnounceFn, DirectorSnapshot, WaveDirector};

use crate::scene::Scene;

/// Stream id for scene randomness; the director uses stream 0 of the same seed.
const SCENE_RNG_STREAM: u64 = 1;

/// Configuration for playing out a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Seconds per frame.
    pub frame_dt: f64,
    /// Give up after this much simulated time.
    pub max_seconds: f64,
    /// Average hits the simulated player lands per second.
    pub hits_per_second: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frame_dt: 1.0 / 60.0,
            max_seconds: 900.0,
            hits_per_second: 3.0,
        }
    }
}

/// Outcome of a played-out zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub zone: String,
    pub seed: u64,
    pub completed: bool,
    pub elapsed_secs: f64,
    pub frames: u64,
    pub waves_reached: u32,
    pub total_waves: u32,
    pub spawned: BTreeMap<SpawnCategory, u32>,
    pub destroyed: u32,
    pub escaped: u32,
    pub announcements: Vec<String>,
}

pub struct ZoneSession {
    zone: ZoneConfig,
    config: SessionConfig,
    director: WaveDirector,
    scene: Scene,
    rng: ChaCha8Rng,
    elapsed: f64,
    frames: u64,
    spawned: BTreeMap<SpawnCategory, u32>,
    destroyed: u32,
    escaped: u32,
}

impl ZoneSession {
    pub fn new(zone: ZoneConfig, config: SessionConfig, announcer: Option<AnnounceFn>) -> Self {
        let mut director = WaveDirector::seeded(config.seed);
        director.initialize(&zone, announcer);

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        rng.set_stream(SCENE_RNG_STREAM);

        Self {
            scene: Scene::new(zone.bounds),
            zone,
            config,
            director,
            rng,
            elapsed: 0.0,
            frames: 0,
            spawned: BTreeMap::new(),
            destroyed: 0,
            escaped: 0,
        }
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance one frame and return the director's view afterwards.
    pub fn frame(&mut self) -> DirectorSnapshot {
        let dt = self.config.frame_dt;

        if let Some(instruction) = self.director.advance(dt) {
            self.scene.materialize(&instruction, &mut self.rng);
            *self.spawned.entry(instruction.category()).or_insert(0) += 1;
        }

        let removal = self
            .scene
            .step(dt, &mut self.rng, self.config.hits_per_second);
        for _ in 0..removal.total() {
            self.director.entity_destroyed();
        }
        self.destroyed += removal.destroyed;
        self.escaped += removal.escaped;

        self.elapsed += dt;
        self.frames += 1;
        self.director.snapshot()
    }

    /// Play frames until the zone is complete or the time limit is hit.
    pub fn run(&mut self) -> SessionReport {
        while !self.director.is_zone_complete() && self.elapsed < self.config.max_seconds {
            self.frame();
        }

        let report = self.report();
        info!(
            "Zone '{}' {} after {:.1}s: {} destroyed, {} escaped",
            report.zone,
            if report.completed { "cleared" } else { "timed out" },
            report.elapsed_secs,
            report.destroyed,
            report.escaped
        );
        report
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            zone: self.zone.name.clone(),
            seed: self.config.seed,
            completed: self.director.is_zone_complete(),
            elapsed_secs: self.elapsed,
            frames: self.frames,
            waves_reached: self.director.current_wave(),
            total_waves: self.director.total_waves(),
            spawned: self.spawned.clone(),
            destroyed: self.destroyed,
            escaped: self.escaped,
            announcements: self
                .director
                .announcements()
                .iter()
                .map(|a| a.message.clone())
                .collect(),
        }
    }
}
