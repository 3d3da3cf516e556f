//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::rules::GameRules`]; the engine reads
//! the rules, never these constants directly.

/// Nominal driver rate (Hz). Movement is per tick, so this sets game speed.
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f64 = 600.0;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: f64 = 400.0;

/// Ground line; adversarial projectiles aim at this height.
pub const GROUND_Y: f64 = 390.0;

// --- Defended sites ---

/// Horizontal positions of the six defended sites.
pub const SITE_POSITIONS: [f64; 6] = [50.0, 150.0, 250.0, 350.0, 450.0, 550.0];

// --- Battery ---

/// Launch battery x.
pub const BATTERY_X: f64 = 300.0;

/// Launch battery y.
pub const BATTERY_Y: f64 = 380.0;

/// Interceptors available per run. Never refilled.
pub const INITIAL_AMMO: u32 = 30;

/// Interceptor travel per tick.
pub const INTERCEPTOR_SPEED: f64 = 8.0;

// --- Adversarial projectiles ---

/// Adversarial travel per tick at zero score.
pub const ADVERSARIAL_BASE_SPEED: f64 = 1.0;

/// Score needed to add one unit of adversarial speed.
pub const ADVERSARIAL_SCORE_DIVISOR: f64 = 5000.0;

// --- Spawner ---

/// Initial time between spawns (ms).
pub const SPAWN_INTERVAL_INITIAL_MS: f64 = 2000.0;

/// Interval reduction after each spawn (ms).
pub const SPAWN_INTERVAL_DECREMENT_MS: f64 = 10.0;

/// The interval never drops below this (ms).
pub const SPAWN_INTERVAL_FLOOR_MS: f64 = 500.0;

// --- Blasts ---

/// Radius of a freshly created blast.
pub const BLAST_INITIAL_RADIUS: f64 = 1.0;

/// Radius growth per tick.
pub const BLAST_GROWTH_PER_TICK: f64 = 2.0;

/// A blast expires once its radius reaches this.
pub const BLAST_MAX_RADIUS: f64 = 40.0;

/// Life lost per tick. 1 / 0.05 = 20 ticks, the same tick the radius
/// reaches `BLAST_MAX_RADIUS` (1 + 2 * 20 = 41).
pub const BLAST_LIFE_DECAY_PER_TICK: f64 = 0.05;

// --- Scoring ---

/// Score for each adversarial projectile caught in a blast.
pub const KILL_REWARD: u32 = 100;

// --- Determinism ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
