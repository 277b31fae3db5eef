use rand::Rng;
use serde::{Deserialize, Serialize};

use starfall_core::constants::*;
use starfall_core::spawn::SpawnEntry;
use starfall_core::types::ZoneConfig;

use crate::spawn_plan::{self, CategoryChances, Palettes};

/// One wave of a zone, generated up front and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    /// 1-based.
    pub wave_number: u32,
    pub difficulty_budget: u32,
    pub spawn_plan: Vec<SpawnEntry>,
    pub spawn_delay_ms: f64,
    pub lull_duration_secs: f64,
    pub is_boss_wave: bool,
}

/// Total budget units the zone's score threshold buys.
pub fn base_budget(zone: &ZoneConfig) -> u32 {
    zone.score_to_clear / SCORE_PER_BUDGET_UNIT
}

/// Budget of the first wave, floored so degenerate zones still spawn.
pub fn budget_per_wave(zone: &ZoneConfig) -> u32 {
    let per_wave = base_budget(zone)
        .checked_div(zone.wave_count)
        .unwrap_or(0);
    per_wave.max(MIN_BUDGET_PER_WAVE)
}

/// Linear ramp: `per_wave + floor(index * per_wave * 0.3)`.
pub fn wave_budget(per_wave: u32, index: u32) -> u32 {
    per_wave + index * per_wave * BUDGET_RAMP_TENTHS / 10
}

/// Delay between spawns within a wave (milliseconds).
pub fn spawn_delay_ms(zone: &ZoneConfig) -> f64 {
    (zone.spawn_interval_ms.min * SPAWN_DELAY_FACTOR).max(MIN_SPAWN_DELAY_MS)
}

pub fn lull_duration_secs(wave_number: u32) -> f64 {
    if wave_number == 1 {
        FIRST_WAVE_LULL_SECS
    } else {
        WAVE_LULL_SECS
    }
}

/// Generate every wave of a zone. Only the final wave can be a boss wave.
pub fn compose_waves<R: Rng + ?Sized>(zone: &ZoneConfig, rng: &mut R) -> Vec<WaveDefinition> {
    let per_wave = budget_per_wave(zone);
    let palettes = Palettes::of(zone);
    let spawn_delay_ms = spawn_delay_ms(zone);

    (0..zone.wave_count)
        .map(|index| {
            let wave_number = index + 1;
            let difficulty_budget = wave_budget(per_wave, index);
            let boss_id = zone
                .boss_id
                .as_deref()
                .filter(|_| wave_number == zone.wave_count);

            let spawn_plan = match boss_id {
                Some(id) => spawn_plan::build_boss(id),
                None => {
                    let chances = CategoryChances::prepare(wave_number, zone.wave_count, &palettes);
                    let progress = spawn_plan::progress(wave_number, zone.wave_count);
                    spawn_plan::build_mixed(difficulty_budget, &chances, progress, &palettes, rng)
                }
            };

            WaveDefinition {
                wave_number,
                difficulty_budget,
                spawn_plan,
                spawn_delay_ms,
                lull_duration_secs: lull_duration_secs(wave_number),
                is_boss_wave: boss_id.is_some(),
            }
        })
        .collect()
}
