//! Progression constants and tuning parameters.

// --- Units ---

/// Spawn timers count milliseconds while frame deltas arrive in seconds.
pub const MS_PER_SECOND: f64 = 1000.0;

// --- Budget ---

/// Score points per difficulty budget unit.
pub const SCORE_PER_BUDGET_UNIT: u32 = 100;

/// Floor for the per-wave budget, so every wave spends something.
pub const MIN_BUDGET_PER_WAVE: u32 = 1;

/// Linear ramp applied per wave index, in tenths (0.3 × budget per wave).
pub const BUDGET_RAMP_TENTHS: u32 = 3;

/// Smallest budget handed to the mixed plan builder.
pub const MIN_PLAN_BUDGET: u32 = 1;

// --- Timing ---

/// Lull before the first wave of a zone (seconds).
pub const FIRST_WAVE_LULL_SECS: f64 = 1.0;

/// Lull before every later wave (seconds).
pub const WAVE_LULL_SECS: f64 = 3.0;

/// Minimum delay between two spawns of the same wave (milliseconds).
pub const MIN_SPAWN_DELAY_MS: f64 = 300.0;

/// Fraction of the zone's minimum spawn interval used as spawn delay.
pub const SPAWN_DELAY_FACTOR: f64 = 0.5;

// --- Category selection ---

/// Pickup chance on the recovery wave (second-to-last wave).
pub const PICKUP_CHANCE_RECOVERY: f64 = 0.3;

/// Pickup chance on every other wave.
pub const PICKUP_CHANCE_BASE: f64 = 0.05;

/// Hazards never appear before this wave number.
pub const HAZARD_FIRST_WAVE: u32 = 3;

/// Hazard chance at zero progress.
pub const HAZARD_CHANCE_BASE: f64 = 0.05;

/// Hazard chance added per unit of progress.
pub const HAZARD_CHANCE_PER_PROGRESS: f64 = 0.15;

/// Enemy chance at zero progress.
pub const ENEMY_CHANCE_BASE: f64 = 0.1;

/// Enemy chance added per unit of progress.
pub const ENEMY_CHANCE_PER_PROGRESS: f64 = 0.4;

// --- Costs ---

pub const PICKUP_COST: u32 = 1;
pub const HAZARD_COST: u32 = 2;
pub const ENEMY_COST: u32 = 2;

// --- Asteroid sizing ---

/// Large asteroid weight per unit of progress.
pub const LARGE_ASTEROID_WEIGHT_PER_PROGRESS: f64 = 0.4;

/// Medium asteroid weight at zero progress.
pub const MEDIUM_ASTEROID_WEIGHT_BASE: f64 = 0.3;

/// Medium asteroid weight added per unit of progress.
pub const MEDIUM_ASTEROID_WEIGHT_PER_PROGRESS: f64 = 0.1;
