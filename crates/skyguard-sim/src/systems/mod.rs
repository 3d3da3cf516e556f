//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; the engine lends them what they need for one tick.

pub mod collision;
pub mod impact;
pub mod kinematics;
pub mod snapshot;
pub mod spawner;
