//! Wave director: the per-zone encounter scheduler.
//!
//! Turns a `ZoneConfig` into a list of waves up front, then walks them
//! through lull → spawning → clearing, handing out at most one
//! `SpawnInstruction` per `advance()` call and counting live entities
//! until the scene reports them destroyed.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starfall_core::constants::MS_PER_SECOND;
use starfall_core::enums::{AsteroidSize, WavePhase};
use starfall_core::events::Announcement;
use starfall_core::spawn::{SpawnEntry, SpawnInstruction};
use starfall_core::types::{RadiusRange, ZoneConfig};

use crate::composer::{self, WaveDefinition};

/// Wave-start announcement hook, called synchronously with the message.
pub type AnnounceFn = Box<dyn FnMut(&str)>;

/// Read-only view of the director for HUD collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSnapshot {
    pub phase: WavePhase,
    pub current_wave: u32,
    pub total_waves: u32,
    pub active_entities: u32,
    pub spawned_in_wave: u32,
    pub planned_in_wave: u32,
    pub is_boss_wave: bool,
}

/// Stateful encounter scheduler for one zone.
///
/// The zone is complete exactly when `phase` is `Complete`; that phase is
/// the single source of truth rather than a separate flag.
pub struct WaveDirector<R: Rng = ChaCha8Rng> {
    rng: R,
    radius_range: RadiusRange,
    waves: Vec<WaveDefinition>,
    current_wave_index: usize,
    phase: WavePhase,
    /// Seconds remaining.
    lull_timer: f64,
    /// Milliseconds remaining.
    spawn_timer: f64,
    spawn_index: usize,
    active_entity_count: u32,
    announcer: Option<AnnounceFn>,
    announcements: Vec<Announcement>,
}

impl WaveDirector<ChaCha8Rng> {
    /// Director with a deterministic ChaCha stream. Same seed = same zone.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> WaveDirector<R> {
    /// Create an idle director. It reports a complete (empty) zone until
    /// `initialize` is called.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            radius_range: RadiusRange { min: 0.0, max: 0.0 },
            waves: Vec::new(),
            current_wave_index: 0,
            phase: WavePhase::Complete,
            lull_timer: 0.0,
            spawn_timer: 0.0,
            spawn_index: 0,
            active_entity_count: 0,
            announcer: None,
            announcements: Vec::new(),
        }
    }

    /// Reset all state and generate every wave of `zone`.
    ///
    /// A zone with no waves is complete immediately.
    pub fn initialize(&mut self, zone: &ZoneConfig, announcer: Option<AnnounceFn>) {
        self.waves = composer::compose_waves(zone, &mut self.rng);
        self.radius_range = zone.asteroid_size_range;
        self.current_wave_index = 0;
        self.spawn_timer = 0.0;
        self.spawn_index = 0;
        self.active_entity_count = 0;
        self.announcer = announcer;
        self.announcements.clear();

        match self.waves.first() {
            Some(first) => {
                self.phase = WavePhase::Lull;
                self.lull_timer = first.lull_duration_secs;
            }
            None => {
                self.phase = WavePhase::Complete;
                self.lull_timer = 0.0;
            }
        }

        info!(
            "Zone '{}' initialized: {} waves, budgets {:?}",
            zone.name,
            self.waves.len(),
            self.waves
                .iter()
                .map(|w| w.difficulty_budget)
                .collect::<Vec<_>>()
        );
    }

    /// Advance the schedule by `dt` seconds. Returns at most one instruction.
    ///
    /// Oversized deltas drain the lull in one call but never emit more
    /// than one spawn; missed spawn intervals are not caught up.
    pub fn advance(&mut self, dt: f64) -> Option<SpawnInstruction> {
        match self.phase {
            WavePhase::Lull => {
                self.tick_lull(dt);
                None
            }
            WavePhase::Spawning => self.tick_spawning(dt),
            WavePhase::Clearing | WavePhase::Complete => None,
        }
    }

    /// Report that one entity spawned by this director was removed.
    ///
    /// Over-reports are absorbed by clamping. Only a report that empties
    /// the count during `Clearing` moves the zone to the next wave.
    pub fn entity_destroyed(&mut self) {
        if self.active_entity_count == 0 {
            debug!("entity_destroyed with no active entities, ignored");
        }
        self.active_entity_count = self.active_entity_count.saturating_sub(1);

        if self.phase == WavePhase::Clearing && self.active_entity_count == 0 {
            self.next_wave();
        }
    }

    pub fn is_zone_complete(&self) -> bool {
        self.phase == WavePhase::Complete
    }

    /// 1-based wave number, never past the total.
    pub fn current_wave(&self) -> u32 {
        (self.current_wave_index + 1).min(self.waves.len()) as u32
    }

    pub fn total_waves(&self) -> u32 {
        self.waves.len() as u32
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn waves(&self) -> &[WaveDefinition] {
        &self.waves
    }

    pub fn active_entity_count(&self) -> u32 {
        self.active_entity_count
    }

    /// Wave-start announcements made since the last `initialize`.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Wave currently being played, `None` once complete.
    pub fn current_wave_definition(&self) -> Option<&WaveDefinition> {
        self.waves.get(self.current_wave_index)
    }

    pub fn snapshot(&self) -> DirectorSnapshot {
        let wave = self.current_wave_definition();
        DirectorSnapshot {
            phase: self.phase,
            current_wave: self.current_wave(),
            total_waves: self.total_waves(),
            active_entities: self.active_entity_count,
            spawned_in_wave: match self.phase {
                WavePhase::Spawning | WavePhase::Clearing => self.spawn_index as u32,
                WavePhase::Lull | WavePhase::Complete => 0,
            },
            planned_in_wave: wave.map_or(0, |w| w.spawn_plan.len() as u32),
            is_boss_wave: wave.is_some_and(|w| w.is_boss_wave),
        }
    }

    fn tick_lull(&mut self, dt: f64) {
        self.lull_timer -= dt;
        if self.lull_timer > 0.0 {
            return;
        }

        self.phase = WavePhase::Spawning;
        self.spawn_index = 0;
        // First spawn lands on the next call, never with the announcement.
        self.spawn_timer = 0.0;
        self.announce_wave_start();
    }

    fn tick_spawning(&mut self, dt: f64) -> Option<SpawnInstruction> {
        self.spawn_timer -= dt * MS_PER_SECOND;

        let wave = self.waves.get(self.current_wave_index)?;
        if self.spawn_timer > 0.0 || self.spawn_index >= wave.spawn_plan.len() {
            return None;
        }

        let entry = wave.spawn_plan[self.spawn_index].clone();
        let plan_len = wave.spawn_plan.len();
        self.spawn_timer = wave.spawn_delay_ms;
        self.spawn_index += 1;
        self.active_entity_count += 1;

        if self.spawn_index >= plan_len {
            self.phase = WavePhase::Clearing;
        }

        debug!(
            "Wave {} spawn {}/{}: {:?}",
            self.current_wave(),
            self.spawn_index,
            plan_len,
            entry
        );

        let range = self.radius_range;
        let rng = &mut self.rng;
        Some(entry.into_instruction(|size| roll_radius(size, &range, rng)))
    }

    fn next_wave(&mut self) {
        if self.current_wave_index + 1 >= self.waves.len() {
            self.current_wave_index = self.waves.len();
            self.phase = WavePhase::Complete;
            info!("Zone complete after {} waves", self.waves.len());
            return;
        }

        self.current_wave_index += 1;
        self.phase = WavePhase::Lull;
        self.lull_timer = self.waves[self.current_wave_index].lull_duration_secs;
        self.active_entity_count = 0;
    }

    fn announce_wave_start(&mut self) {
        let Some(wave) = self.waves.get(self.current_wave_index) else {
            return;
        };

        let boss_id = wave.spawn_plan.iter().find_map(|entry| match entry {
            SpawnEntry::Boss { id } if wave.is_boss_wave => Some(id.as_str()),
            _ => None,
        });
        let announcement = Announcement::wave_start(wave.wave_number, self.total_waves(), boss_id);

        info!("{}", announcement.message);
        if let Some(announce) = self.announcer.as_mut() {
            announce(&announcement.message);
        }
        self.announcements.push(announcement);
    }
}

/// Fresh radius inside the size's band of the zone range.
fn roll_radius<R: Rng + ?Sized>(size: AsteroidSize, range: &RadiusRange, rng: &mut R) -> f32 {
    let (lo, hi) = size.radius_band(range);
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
