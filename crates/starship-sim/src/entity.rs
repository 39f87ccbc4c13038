//! Shared kinematic body and the `Entity` contract.
//!
//! Every simulated object embeds a `Body`. Kinds differ only in their extra
//! state and in how `update` extends plain integration.

use serde::{Deserialize, Serialize};

use starship_core::types::Vector2D;

/// Position, velocity, collision radius and the soft-delete flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub radius: f32,
    /// Inactive bodies are skipped by every system and reclaimed at frame end.
    pub active: bool,
}

impl Body {
    /// An active body at rest.
    pub fn new(position: Vector2D, radius: f32) -> Self {
        Self {
            position,
            velocity: Vector2D::ZERO,
            radius,
            active: true,
        }
    }

    /// position += velocity * dt
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Circle-circle overlap. Strict: touching circles do not collide.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }

    /// Toroidal wrap into `[0, width] x [0, height]`.
    pub fn wrap(&mut self, width: f32, height: f32) {
        if self.position.x < 0.0 {
            self.position.x += width;
        }
        if self.position.x > width {
            self.position.x -= width;
        }
        if self.position.y < 0.0 {
            self.position.y += height;
        }
        if self.position.y > height {
            self.position.y -= height;
        }
    }
}

/// Common contract of asteroids, projectiles and the starship.
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance one frame. The default is plain kinematic integration.
    fn update(&mut self, dt: f32) {
        self.body_mut().integrate(dt);
    }

    fn position(&self) -> Vector2D {
        self.body().position
    }

    fn velocity(&self) -> Vector2D {
        self.body().velocity
    }

    fn radius(&self) -> f32 {
        self.body().radius
    }

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn set_position(&mut self, position: Vector2D) {
        self.body_mut().position = position;
    }

    fn set_velocity(&mut self, velocity: Vector2D) {
        self.body_mut().velocity = velocity;
    }

    fn set_active(&mut self, active: bool) {
        self.body_mut().active = active;
    }

    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.body().overlaps(other.body())
    }

    fn wrap_screen(&mut self, width: f32, height: f32) {
        self.body_mut().wrap(width, height);
    }
}
