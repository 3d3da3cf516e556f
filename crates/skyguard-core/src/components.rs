//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Straight-line flight toward a fixed aim point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Point the projectile detonates at.
    pub target: Position,
    /// Distance covered per tick.
    pub speed: f64,
}

/// Marks an entity as a player interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor;

/// Marks an entity as an incoming adversarial projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adversarial {
    /// Index of the defended site this projectile is aimed at.
    pub site: usize,
}

/// Expanding blast zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blast {
    /// Current radius; grows every tick.
    pub radius: f64,
    /// Radius at which the blast expires.
    pub max_radius: f64,
    /// Remaining life, 1.0 at creation; expires at or below 0.
    pub life: f64,
}

/// A defended site on the ground line. Not an entity: the engine keeps the
/// fixed set in a plain vector indexed by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefendedSite {
    pub id: usize,
    pub x: f64,
    pub alive: bool,
}
