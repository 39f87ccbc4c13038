//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in field units (x right, y down).
///
/// `glam::Vec2` already carries the operations the simulation needs:
/// `+`, `-`, `* f32`, `+=`, `length`, `normalize_or_zero`, `distance`.
pub use glam::Vec2 as Vector2D;

/// Build a vector from a heading (radians, measured from +x) and a magnitude.
pub fn from_polar(angle: f32, magnitude: f32) -> Vector2D {
    Vector2D::new(angle.cos() * magnitude, angle.sin() * magnitude)
}

/// Heading of a vector in radians, measured from +x. Zero vector yields 0.
pub fn heading(v: Vector2D) -> f32 {
    v.y.atan2(v.x)
}

/// Simulation time tracking. The frame that ends the game is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of Playing frames simulated this session.
    pub frame: u64,
    /// Accumulated simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += f64::from(dt);
    }
}
