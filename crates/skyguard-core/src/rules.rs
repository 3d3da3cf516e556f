//! Tunable game rules.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! partial JSON document only overrides what it names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// All tunables the engine reads during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub field_width: f64,
    pub field_height: f64,
    pub ground_y: f64,
    pub site_positions: Vec<f64>,
    pub battery: Position,
    pub initial_ammo: u32,
    pub interceptor_speed: f64,
    pub adversarial_base_speed: f64,
    pub adversarial_score_divisor: f64,
    pub spawn_interval_initial_ms: f64,
    pub spawn_interval_decrement_ms: f64,
    pub spawn_interval_floor_ms: f64,
    pub blast_initial_radius: f64,
    pub blast_growth_per_tick: f64,
    pub blast_max_radius: f64,
    pub blast_life_decay_per_tick: f64,
    pub kill_reward: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_y: GROUND_Y,
            site_positions: SITE_POSITIONS.to_vec(),
            battery: Position::new(BATTERY_X, BATTERY_Y),
            initial_ammo: INITIAL_AMMO,
            interceptor_speed: INTERCEPTOR_SPEED,
            adversarial_base_speed: ADVERSARIAL_BASE_SPEED,
            adversarial_score_divisor: ADVERSARIAL_SCORE_DIVISOR,
            spawn_interval_initial_ms: SPAWN_INTERVAL_INITIAL_MS,
            spawn_interval_decrement_ms: SPAWN_INTERVAL_DECREMENT_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            blast_initial_radius: BLAST_INITIAL_RADIUS,
            blast_growth_per_tick: BLAST_GROWTH_PER_TICK,
            blast_max_radius: BLAST_MAX_RADIUS,
            blast_life_decay_per_tick: BLAST_LIFE_DECAY_PER_TICK,
            kill_reward: KILL_REWARD,
        }
    }
}

/// Reasons a rules document cannot drive a session.
#[derive(Debug, Clone, PartialEq)]
pub enum RulesError {
    /// The playfield has a non-positive dimension.
    EmptyField,
    /// No defended sites were configured.
    NoSites,
    /// A site lies outside `0..field_width`.
    SiteOutOfField { index: usize, x: f64 },
    /// A speed that must be positive is not.
    NonPositiveSpeed(&'static str),
    /// The score divisor must be positive.
    NonPositiveDivisor,
    /// The spawn interval floor is above the initial interval, or negative.
    BadSpawnRamp { initial_ms: f64, floor_ms: f64 },
    /// Blasts would never grow or never lose life.
    BlastNeverExpires,
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::EmptyField => write!(f, "playfield width and height must be positive"),
            RulesError::NoSites => write!(f, "at least one defended site is required"),
            RulesError::SiteOutOfField { index, x } => {
                write!(f, "site {index} at x={x} lies outside the playfield")
            }
            RulesError::NonPositiveSpeed(name) => write!(f, "{name} must be positive"),
            RulesError::NonPositiveDivisor => {
                write!(f, "adversarial_score_divisor must be positive")
            }
            RulesError::BadSpawnRamp {
                initial_ms,
                floor_ms,
            } => write!(
                f,
                "spawn interval floor {floor_ms}ms must be in 0..={initial_ms}ms"
            ),
            RulesError::BlastNeverExpires => {
                write!(f, "blast growth and life decay must both be positive")
            }
        }
    }
}

impl std::error::Error for RulesError {}

impl GameRules {
    /// Check that the rules describe a playable session.
    pub fn validate(&self) -> Result<(), RulesError> {
        if !(self.field_width.is_finite() && self.field_width > 0.0)
            || !(self.field_height.is_finite() && self.field_height > 0.0)
        {
            return Err(RulesError::EmptyField);
        }
        if self.site_positions.is_empty() {
            return Err(RulesError::NoSites);
        }
        for (index, &x) in self.site_positions.iter().enumerate() {
            if !(0.0..=self.field_width).contains(&x) {
                return Err(RulesError::SiteOutOfField { index, x });
            }
        }
        if self.interceptor_speed <= 0.0 {
            return Err(RulesError::NonPositiveSpeed("interceptor_speed"));
        }
        if self.adversarial_base_speed <= 0.0 {
            return Err(RulesError::NonPositiveSpeed("adversarial_base_speed"));
        }
        if self.adversarial_score_divisor <= 0.0 {
            return Err(RulesError::NonPositiveDivisor);
        }
        if self.spawn_interval_floor_ms < 0.0
            || self.spawn_interval_floor_ms > self.spawn_interval_initial_ms
        {
            return Err(RulesError::BadSpawnRamp {
                initial_ms: self.spawn_interval_initial_ms,
                floor_ms: self.spawn_interval_floor_ms,
            });
        }
        if self.blast_growth_per_tick <= 0.0 || self.blast_life_decay_per_tick <= 0.0 {
            return Err(RulesError::BlastNeverExpires);
        }
        Ok(())
    }

    /// Number of defended sites.
    pub fn site_count(&self) -> usize {
        self.site_positions.len()
    }

    /// Adversarial speed at the given score: `base + score / divisor`.
    pub fn adversarial_speed(&self, score: u32) -> f64 {
        self.adversarial_base_speed + score as f64 / self.adversarial_score_divisor
    }
}
