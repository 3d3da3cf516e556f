//! State shared between the real-time game loop thread and its controller.

use std::sync::{Arc, Mutex};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the loop, polled by the renderer.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
