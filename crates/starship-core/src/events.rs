//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AsteroidSize;

/// Gameplay events accumulated during `update`/`handle_input` and drained by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile was fired from the ship.
    ProjectileFired { x: f32, y: f32 },
    /// An asteroid was shot down and its points awarded.
    AsteroidDestroyed {
        size: AsteroidSize,
        points: u32,
        x: f32,
        y: f32,
    },
    /// A destroyed asteroid broke into smaller fragments.
    AsteroidSplit {
        size: AsteroidSize,
        fragments: u32,
    },
    /// The ship collided with an asteroid.
    PlayerHit { health_remaining: i32 },
    /// The asteroid field was cleared and a new wave spawned.
    LevelAdvanced { level: u32 },
    /// The ship ran out of health.
    GameOver { score: u32, level: u32 },
    /// A fresh session was started.
    SessionReset,
}
