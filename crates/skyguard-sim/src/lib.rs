//! Simulation engine for SKYGUARD.
//!
//! Owns the hecs ECS world, runs systems once per driver tick,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod game_state;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyguard_core as core;
