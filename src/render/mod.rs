//! Rendering on top of raylib.
//!
//! Re-exports:
//! - `textures`: sprite textures with procedural fallbacks
//! - `sprites`: tile and player drawing

pub mod textures;
pub mod sprites;
