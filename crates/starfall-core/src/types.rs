//! Zone configuration types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ZoneConfigError;

/// Spawn cadence bounds for a zone, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnInterval {
    pub start: f64,
    pub min: f64,
}

/// Asteroid radius bounds for a zone, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusRange {
    pub min: f32,
    pub max: f32,
}

/// Axis-aligned playfield rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Declarative description of one combat zone.
///
/// Built by a level definition before the zone starts and read-only for
/// the whole playthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    pub name: String,
    /// Drives the total difficulty budget of the zone.
    pub score_to_clear: u32,
    pub wave_count: u32,
    pub spawn_interval_ms: SpawnInterval,
    pub asteroid_size_range: RadiusRange,
    #[serde(default)]
    pub enemy_palette: Vec<String>,
    #[serde(default)]
    pub hazard_palette: Vec<String>,
    #[serde(default)]
    pub pickup_palette: Vec<String>,
    /// Set only when the zone culminates in a boss wave.
    #[serde(default)]
    pub boss_id: Option<String>,
    pub bounds: Bounds,
}

impl ZoneConfig {
    /// Check the config for contract violations.
    ///
    /// The wave director tolerates every config this rejects (it clamps),
    /// so this is meant for level loading and tooling.
    pub fn validate(&self) -> Result<(), ZoneConfigError> {
        if self.wave_count == 0 {
            return Err(ZoneConfigError::NoWaves);
        }

        let interval = self.spawn_interval_ms;
        if !(interval.min >= 0.0 && interval.min <= interval.start) {
            return Err(ZoneConfigError::SpawnInterval {
                start: interval.start,
                min: interval.min,
            });
        }

        let radius = self.asteroid_size_range;
        if !(radius.min > 0.0 && radius.min <= radius.max) {
            return Err(ZoneConfigError::RadiusRange {
                min: radius.min,
                max: radius.max,
            });
        }

        if !self.bounds.size().cmpgt(Vec2::ZERO).all() {
            return Err(ZoneConfigError::DegenerateBounds);
        }

        for (palette, kinds) in [
            ("enemy", &self.enemy_palette),
            ("hazard", &self.hazard_palette),
            ("pickup", &self.pickup_palette),
        ] {
            if kinds.iter().any(|k| k.trim().is_empty()) {
                return Err(ZoneConfigError::BlankKind { palette });
            }
        }

        if self.boss_id.as_ref().is_some_and(|id| id.trim().is_empty()) {
            return Err(ZoneConfigError::BlankKind { palette: "boss" });
        }

        Ok(())
    }
}
