//! Discrete input signals sent from the input layer to the simulation.
//!
//! Movement is a level input: the driver re-sends `MoveLeft`/`MoveRight`
//! every frame the key is held and sends `StopMoving` when none is.

use serde::{Deserialize, Serialize};

/// All player actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputSignal {
    /// Set horizontal velocity to the left.
    MoveLeft,
    /// Set horizontal velocity to the right.
    MoveRight,
    /// Zero horizontal velocity.
    StopMoving,
    /// Accelerate along the ship's facing for this frame.
    Thrust,
    /// Fire one projectile if the cooldown has expired.
    Fire,
    /// Start a fresh session. Only honoured after game over.
    Reset,
}
