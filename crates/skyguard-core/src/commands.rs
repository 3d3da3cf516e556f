//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, or applied
//! directly through the matching engine methods.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Launch an interceptor at a playfield point. Running only, needs ammo.
    Fire { x: f64, y: f64 },
    /// Start a fresh run from Idle.
    Start,
    /// Suspend a running game back to Idle (player left the game view).
    Stop,
    /// Start a fresh run after GameOver.
    Restart,
}
