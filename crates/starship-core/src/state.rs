//! Game state snapshot: the complete visible state handed to a renderer.

use serde::{Deserialize, Serialize};

use crate::enums::{AsteroidSize, GamePhase};
use crate::types::{SimTime, Vector2D};

/// Complete visible state after a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub width: f32,
    pub height: f32,
    pub player: PlayerView,
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<ProjectileView>,
}

/// Player ship status for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vector2D,
    /// Facing in radians.
    pub rotation: f32,
    pub health: i32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Vector2D,
    pub radius: f32,
    pub size: AsteroidSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vector2D,
}

impl GameStateSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
