//! Projectiles: short-lived shots that expire after a fixed lifetime.

use starship_core::constants::{PROJECTILE_MAX_LIFETIME, PROJECTILE_RADIUS};
use starship_core::types::Vector2D;

use crate::entity::{Body, Entity};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    body: Body,
    /// Seconds since the shot was fired.
    lifetime: f32,
    max_lifetime: f32,
}

impl Projectile {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        let mut body = Body::new(position, PROJECTILE_RADIUS);
        body.velocity = velocity;
        Self {
            body,
            lifetime: 0.0,
            max_lifetime: PROJECTILE_MAX_LIFETIME,
        }
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn max_lifetime(&self) -> f32 {
        self.max_lifetime
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Integrates, then expires once the lifetime strictly exceeds the maximum.
    fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.lifetime += dt;
        if self.lifetime > self.max_lifetime {
            self.body.active = false;
        }
    }
}
