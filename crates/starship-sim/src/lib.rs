//! Simulation engine for STARSHIP.
//!
//! Owns the player ship, the asteroid and projectile arenas, and a seeded
//! RNG; runs the per-frame systems and produces `GameStateSnapshot`s.
//! Completely headless, so a fixed seed gives a reproducible session.

pub mod asteroid;
pub mod config;
pub mod engine;
pub mod entity;
pub mod projectile;
pub mod starship;
pub mod systems;

pub use config::{ConfigError, SimConfig};
pub use engine::Game;
pub use entity::{Body, Entity};
