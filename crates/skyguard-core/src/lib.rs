//! Core types and definitions for the SKYGUARD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, rules, state snapshots, events, and constants.
//! It has no dependency on any runtime framework or ECS.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod rules;
pub mod state;
pub mod types;
