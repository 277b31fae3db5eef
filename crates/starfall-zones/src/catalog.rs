//! Built-in zones, ordered by difficulty.
//!
//! Each zone sets its score threshold, wave count, cadence and palettes.
//! Only the last one ends in a boss wave.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use starfall_core::types::{Bounds, RadiusRange, SpawnInterval, ZoneConfig};

/// Playfield shared by every built-in zone.
const PLAYFIELD_HALF_WIDTH: f32 = 640.0;
const PLAYFIELD_HALF_HEIGHT: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    OuterBelt,
    NebulaRun,
    DreadnoughtGate,
}

impl ZoneId {
    pub const ALL: [ZoneId; 3] = [ZoneId::OuterBelt, ZoneId::NebulaRun, ZoneId::DreadnoughtGate];

    /// Kebab-case key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            ZoneId::OuterBelt => "outer-belt",
            ZoneId::NebulaRun => "nebula-run",
            ZoneId::DreadnoughtGate => "dreadnought-gate",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ZoneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| format!("unknown zone '{s}'"))
    }
}

/// Build the config for a built-in zone.
pub fn zone(id: ZoneId) -> ZoneConfig {
    match id {
        ZoneId::OuterBelt => outer_belt(),
        ZoneId::NebulaRun => nebula_run(),
        ZoneId::DreadnoughtGate => dreadnought_gate(),
    }
}

pub fn all() -> Vec<ZoneConfig> {
    ZoneId::ALL.into_iter().map(zone).collect()
}

/// "Outer Belt": 3 waves of mostly rock with a few scouts.
/// No hazards or pickups.
fn outer_belt() -> ZoneConfig {
    ZoneConfig {
        name: "Outer Belt".to_string(),
        score_to_clear: 1500,
        wave_count: 3,
        spawn_interval_ms: SpawnInterval {
            start: 1400.0,
            min: 900.0,
        },
        asteroid_size_range: RadiusRange { min: 8.0, max: 32.0 },
        enemy_palette: vec!["scout".to_string()],
        hazard_palette: Vec::new(),
        pickup_palette: Vec::new(),
        boss_id: None,
        bounds: playfield(),
    }
}

/// "Nebula Run": 5 waves, mines and ion storms from wave 3,
/// a shield drop on the recovery wave.
fn nebula_run() -> ZoneConfig {
    ZoneConfig {
        name: "Nebula Run".to_string(),
        score_to_clear: 4000,
        wave_count: 5,
        spawn_interval_ms: SpawnInterval {
            start: 1100.0,
            min: 700.0,
        },
        asteroid_size_range: RadiusRange { min: 6.0, max: 28.0 },
        enemy_palette: vec!["scout".to_string(), "raider".to_string()],
        hazard_palette: vec!["mine".to_string(), "ion_storm".to_string()],
        pickup_palette: vec!["shield".to_string()],
        boss_id: None,
        bounds: playfield(),
    }
}

/// "Dreadnought Gate": 6 waves of everything, ending with the Leviathan.
fn dreadnought_gate() -> ZoneConfig {
    ZoneConfig {
        name: "Dreadnought Gate".to_string(),
        score_to_clear: 9000,
        wave_count: 6,
        spawn_interval_ms: SpawnInterval {
            start: 900.0,
            min: 500.0,
        },
        asteroid_size_range: RadiusRange { min: 6.0, max: 36.0 },
        enemy_palette: vec![
            "raider".to_string(),
            "lancer".to_string(),
            "bomber".to_string(),
        ],
        hazard_palette: vec![
            "mine".to_string(),
            "ion_storm".to_string(),
            "gravity_well".to_string(),
        ],
        pickup_palette: vec!["shield".to_string(), "overcharge".to_string()],
        boss_id: Some("leviathan".to_string()),
        bounds: playfield(),
    }
}

fn playfield() -> Bounds {
    let half = Vec2::new(PLAYFIELD_HALF_WIDTH, PLAYFIELD_HALF_HEIGHT);
    Bounds::new(-half, half)
}
