//! Spawn plan construction.
//!
//! Pure functions that spend a wave's difficulty budget on spawn entries,
//! weighted by zone progress and palette, then shuffle the result.
//! The random source is always passed in so plans are reproducible.

use log::debug;
use rand::Rng;

use starfall_core::constants::*;
use starfall_core::enums::{AsteroidSize, SpawnCategory};
use starfall_core::spawn::SpawnEntry;
use starfall_core::types::ZoneConfig;

/// Entity kinds a zone permits per category. Empty means absent.
#[derive(Debug, Clone, Copy)]
pub struct Palettes<'a> {
    pub enemies: &'a [String],
    pub hazards: &'a [String],
    pub pickups: &'a [String],
}

impl<'a> Palettes<'a> {
    pub fn of(zone: &'a ZoneConfig) -> Self {
        Self {
            enemies: &zone.enemy_palette,
            hazards: &zone.hazard_palette,
            pickups: &zone.pickup_palette,
        }
    }
}

/// Per-wave category probabilities, prepared once before the budget loop.
/// A category with an empty palette always has chance 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryChances {
    pub pickup: f64,
    pub hazard: f64,
    pub enemy: f64,
}

impl CategoryChances {
    pub fn prepare(wave_number: u32, total_waves: u32, palettes: &Palettes<'_>) -> Self {
        let progress = progress(wave_number, total_waves);
        let is_recovery_wave = total_waves >= 1 && wave_number == total_waves - 1;

        let pickup = if palettes.pickups.is_empty() {
            0.0
        } else if is_recovery_wave {
            PICKUP_CHANCE_RECOVERY
        } else {
            PICKUP_CHANCE_BASE
        };

        let hazard = if palettes.hazards.is_empty() || wave_number < HAZARD_FIRST_WAVE {
            0.0
        } else {
            HAZARD_CHANCE_BASE + progress * HAZARD_CHANCE_PER_PROGRESS
        };

        let enemy = if palettes.enemies.is_empty() {
            0.0
        } else {
            ENEMY_CHANCE_BASE + progress * ENEMY_CHANCE_PER_PROGRESS
        };

        Self {
            pickup,
            hazard,
            enemy,
        }
    }

    /// Map one draw in [0, 1) onto the priority cascade
    /// pickup → hazard → enemy → asteroid.
    fn select(&self, roll: f64) -> SpawnCategory {
        let mut threshold = self.pickup;
        if roll < threshold {
            return SpawnCategory::Pickup;
        }
        threshold += self.hazard;
        if roll < threshold {
            return SpawnCategory::Hazard;
        }
        threshold += self.enemy;
        if roll < threshold {
            return SpawnCategory::Enemy;
        }
        SpawnCategory::Asteroid
    }
}

/// Position of a wave within its zone, in [0, 1].
pub fn progress(wave_number: u32, total_waves: u32) -> f64 {
    if total_waves == 0 {
        return 0.0;
    }
    (wave_number as f64 / total_waves as f64).clamp(0.0, 1.0)
}

/// Roll an asteroid size category weighted by progress.
pub fn roll_asteroid_size<R: Rng + ?Sized>(progress: f64, rng: &mut R) -> AsteroidSize {
    let large = progress * LARGE_ASTEROID_WEIGHT_PER_PROGRESS;
    let medium = MEDIUM_ASTEROID_WEIGHT_BASE + progress * MEDIUM_ASTEROID_WEIGHT_PER_PROGRESS;
    let roll: f64 = rng.gen();
    if roll < large {
        AsteroidSize::Large
    } else if roll < large + medium {
        AsteroidSize::Medium
    } else {
        AsteroidSize::Small
    }
}

/// Spend `budget` on a mixed plan, then shuffle it.
///
/// A zero budget is clamped to 1 so the plan is never empty.
pub fn build_mixed<R: Rng + ?Sized>(
    budget: u32,
    chances: &CategoryChances,
    progress: f64,
    palettes: &Palettes<'_>,
    rng: &mut R,
) -> Vec<SpawnEntry> {
    let mut remaining = budget.max(MIN_PLAN_BUDGET);
    let mut entries = Vec::new();

    while remaining > 0 {
        let mut category = chances.select(rng.gen());
        if category.flat_cost().is_some_and(|cost| cost > remaining) {
            category = SpawnCategory::Asteroid;
        }

        let entry = match category {
            SpawnCategory::Pickup => SpawnEntry::Pickup {
                kind: pick_kind(palettes.pickups, rng),
            },
            SpawnCategory::Hazard => SpawnEntry::Hazard {
                kind: pick_kind(palettes.hazards, rng),
            },
            SpawnCategory::Enemy => SpawnEntry::Enemy {
                kind: pick_kind(palettes.enemies, rng),
            },
            SpawnCategory::Asteroid | SpawnCategory::Boss => {
                let mut size = roll_asteroid_size(progress, rng);
                if size.cost() > remaining {
                    size = AsteroidSize::Small;
                }
                SpawnEntry::Asteroid { size }
            }
        };

        remaining -= entry.cost();
        entries.push(entry);
    }

    shuffle_in_place(&mut entries, rng);
    debug!(
        "Built mixed plan: budget {budget}, {} entries, progress {progress:.2}",
        entries.len()
    );
    entries
}

/// Boss waves ignore the budget: one boss entry and nothing else.
pub fn build_boss(boss_id: &str) -> Vec<SpawnEntry> {
    vec![SpawnEntry::Boss {
        id: boss_id.to_string(),
    }]
}

/// Fisher–Yates: walk from the last index down to 1, swapping each slot
/// with a uniform index in `[0, i]`.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Palettes reaching here are non-empty: empty ones have chance 0.
fn pick_kind<R: Rng + ?Sized>(palette: &[String], rng: &mut R) -> String {
    palette[rng.gen_range(0..palette.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn kinds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_palettes_force_zero_chances() {
        let empty: Vec<String> = Vec::new();
        let palettes = Palettes {
            enemies: &empty,
            hazards: &empty,
            pickups: &empty,
        };
        let chances = CategoryChances::prepare(5, 5, &palettes);
        assert_eq!(
            chances,
            CategoryChances {
                pickup: 0.0,
                hazard: 0.0,
                enemy: 0.0
            }
        );
    }

    #[test]
    fn hazards_gated_before_wave_three() {
        let hazards = kinds(&["mine"]);
        let empty: Vec<String> = Vec::new();
        let palettes = Palettes {
            enemies: &empty,
            hazards: &hazards,
            pickups: &empty,
        };
        assert_eq!(CategoryChances::prepare(2, 6, &palettes).hazard, 0.0);
        let wave3 = CategoryChances::prepare(3, 6, &palettes).hazard;
        assert!((wave3 - (0.05 + 0.5 * 0.15)).abs() < 1e-12);
    }

    #[test]
    fn recovery_wave_raises_pickup_chance() {
        let pickups = kinds(&["shield"]);
        let empty: Vec<String> = Vec::new();
        let palettes = Palettes {
            enemies: &empty,
            hazards: &empty,
            pickups: &pickups,
        };
        assert_eq!(CategoryChances::prepare(3, 4, &palettes).pickup, 0.3);
        assert_eq!(CategoryChances::prepare(2, 4, &palettes).pickup, 0.05);
        assert_eq!(CategoryChances::prepare(4, 4, &palettes).pickup, 0.05);
    }

    #[test]
    fn select_follows_priority_cascade() {
        let chances = CategoryChances {
            pickup: 0.1,
            hazard: 0.2,
            enemy: 0.3,
        };
        assert_eq!(chances.select(0.05), SpawnCategory::Pickup);
        assert_eq!(chances.select(0.15), SpawnCategory::Hazard);
        assert_eq!(chances.select(0.45), SpawnCategory::Enemy);
        assert_eq!(chances.select(0.6), SpawnCategory::Asteroid);
        assert_eq!(chances.select(0.99), SpawnCategory::Asteroid);
    }

    #[test]
    fn mixed_plan_spends_budget_exactly() {
        let enemies = kinds(&["raider", "lancer"]);
        let hazards = kinds(&["mine"]);
        let pickups = kinds(&["shield"]);
        let palettes = Palettes {
            enemies: &enemies,
            hazards: &hazards,
            pickups: &pickups,
        };
        let chances = CategoryChances::prepare(4, 5, &palettes);
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let plan = build_mixed(17, &chances, 0.8, &palettes, &mut rng);
            let spent: u32 = plan.iter().map(SpawnEntry::cost).sum();
            assert_eq!(spent, 17, "seed {seed} spent {spent}");
        }
    }

    #[test]
    fn zero_budget_still_yields_one_entry() {
        let empty: Vec<String> = Vec::new();
        let palettes = Palettes {
            enemies: &empty,
            hazards: &empty,
            pickups: &empty,
        };
        let chances = CategoryChances::prepare(1, 3, &palettes);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let plan = build_mixed(0, &chances, 1.0 / 3.0, &palettes, &mut rng);
        assert_eq!(
            plan,
            vec![SpawnEntry::Asteroid {
                size: AsteroidSize::Small
            }]
        );
    }

    #[test]
    fn unaffordable_categories_fall_through_to_small_asteroid() {
        let enemies = kinds(&["raider"]);
        let empty: Vec<String> = Vec::new();
        let palettes = Palettes {
            enemies: &enemies,
            hazards: &empty,
            pickups: &empty,
        };
        // Every roll lands on enemy, but a budget of 1 cannot pay for one.
        let chances = CategoryChances {
            pickup: 0.0,
            hazard: 0.0,
            enemy: 1.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let plan = build_mixed(1, &chances, 1.0, &palettes, &mut rng);
        assert_eq!(
            plan,
            vec![SpawnEntry::Asteroid {
                size: AsteroidSize::Small
            }]
        );
    }

    #[test]
    fn no_large_asteroids_at_zero_progress() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..1000 {
            assert_ne!(roll_asteroid_size(0.0, &mut rng), AsteroidSize::Large);
        }
    }

    #[test]
    fn boss_plan_is_single_entry() {
        assert_eq!(
            build_boss("leviathan"),
            vec![SpawnEntry::Boss {
                id: "leviathan".to_string()
            }]
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle_in_place(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted, "50 items should not shuffle to identity");
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut empty: Vec<u8> = Vec::new();
        shuffle_in_place(&mut empty, &mut rng);
        let mut one = vec![42];
        shuffle_in_place(&mut one, &mut rng);
        assert_eq!(one, vec![42]);
    }
}
