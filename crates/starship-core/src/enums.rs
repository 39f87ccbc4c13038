//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Asteroid size tier. Radius, score and split target derive from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    #[default]
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    /// Collision radius for this tier.
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Large => ASTEROID_LARGE_RADIUS,
            AsteroidSize::Medium => ASTEROID_MEDIUM_RADIUS,
            AsteroidSize::Small => ASTEROID_SMALL_RADIUS,
        }
    }

    /// Points awarded for destroying an asteroid of this tier.
    pub fn points(self) -> u32 {
        match self {
            AsteroidSize::Large => ASTEROID_LARGE_POINTS,
            AsteroidSize::Medium => ASTEROID_MEDIUM_POINTS,
            AsteroidSize::Small => ASTEROID_SMALL_POINTS,
        }
    }

    /// Tier of the fragments produced when this tier splits.
    /// Small maps to itself; callers check `can_split` first.
    pub fn next_smaller(self) -> AsteroidSize {
        match self {
            AsteroidSize::Large => AsteroidSize::Medium,
            AsteroidSize::Medium | AsteroidSize::Small => AsteroidSize::Small,
        }
    }

    pub fn can_split(self) -> bool {
        self != AsteroidSize::Small
    }
}

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Terminal until an explicit reset.
    GameOver,
}
