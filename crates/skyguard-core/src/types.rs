//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels).
/// x grows to the right, y grows downward; y = 0 is the top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of running ticks since the last reset.
    pub tick: u64,
    /// Driver timestamp of the most recent tick (milliseconds, monotonic).
    pub now_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }
}

impl From<Position> for DVec2 {
    fn from(pos: Position) -> Self {
        DVec2::new(pos.x, pos.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl SimTime {
    /// Advance by one tick stamped with the driver's timestamp.
    pub fn advance(&mut self, now_ms: f64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}
