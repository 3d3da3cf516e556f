//! Events emitted by the simulation for presentation and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired from the battery.
    InterceptorLaunched { target: Position, ammo_left: u32 },
    /// New adversarial projectile at the top edge.
    AdversarialSpawned { origin: Position, site: usize, speed: f64 },
    /// A projectile reached its aim point and became a blast.
    Detonation { at: Position, kind: ProjectileKind },
    /// An adversarial projectile was caught in a blast.
    AdversarialDestroyed { at: Position, score: u32 },
    /// A defended site was hit.
    SiteDestroyed { site: usize, sites_remaining: u32 },
    /// The run ended.
    GameOver { cause: GameOverCause, score: u32 },
}
