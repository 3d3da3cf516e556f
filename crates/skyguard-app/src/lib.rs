//! SKYGUARD drivers.
//!
//! This crate wires the headless simulation to something that calls `tick`:
//! a fixed-step harness for batch runs and a real-time loop thread.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod headless;
pub mod state;

pub use skyguard_core as core;
