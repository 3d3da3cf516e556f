//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not running, no live entities.
    #[default]
    Idle,
    /// Tick-driven simulation active.
    Running,
    /// Simulation frozen, awaiting restart.
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// The spawner found no alive site to target.
    NoTargetsLeft,
    /// The last alive site was destroyed by an arriving projectile.
    LastSiteDestroyed,
}

/// Which kind of projectile produced a detonation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Interceptor,
    Adversarial,
}
