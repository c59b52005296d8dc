//! Core game types and logic (data, input, physics, world).
//!
//! Re-exports:
//! - `level`: Level grid loading and tile generation
//! - `player`: Player data and hitbox
//! - `input`: Per-frame key snapshot
//! - `physics`: Gravity, velocity and tile collision
//! - `world`: One-frame simulation step

pub mod level;
pub mod player;
pub mod input;
pub mod physics;
pub mod world;
