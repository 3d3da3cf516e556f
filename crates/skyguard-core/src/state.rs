//! Game state snapshot: the complete visible state handed to the renderer
//! after each tick. Read-only: the renderer polls it, the core never pushes.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub battery: Position,
    pub sites: Vec<SiteView>,
    pub interceptors: Vec<ProjectileView>,
    pub adversarials: Vec<ProjectileView>,
    pub blasts: Vec<BlastView>,
    /// Events raised during this tick (and by input applied since the last one).
    pub events: Vec<GameEvent>,
}

/// Counters bound to the UI text fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub ammo: u32,
    pub sites_remaining: u32,
    /// True once the battery is empty; renderers highlight the ammo counter.
    pub ammo_depleted: bool,
}

/// A defended site on the ground line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteView {
    pub id: usize,
    pub x: f64,
    pub alive: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub target: Position,
    pub speed: f64,
}

/// A live blast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastView {
    pub center: Position,
    pub radius: f64,
    /// 1.0 at creation, fades toward 0; renderers use it as opacity.
    pub life: f64,
}
