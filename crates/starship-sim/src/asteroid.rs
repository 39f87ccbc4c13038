//! Asteroids: size-tiered entities that split when shot.

use starship_core::constants::ASTEROID_ROTATION_SPEED;
use starship_core::enums::AsteroidSize;
use starship_core::types::Vector2D;

use crate::entity::{Body, Entity};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    body: Body,
    size: AsteroidSize,
    /// Cosmetic spin for renderers. Physics ignores it.
    rotation_speed: f32,
}

impl Asteroid {
    /// Radius is derived from `size`.
    pub fn new(position: Vector2D, velocity: Vector2D, size: AsteroidSize) -> Self {
        let mut body = Body::new(position, size.radius());
        body.velocity = velocity;
        Self {
            body,
            size,
            rotation_speed: ASTEROID_ROTATION_SPEED,
        }
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    pub fn points(&self) -> u32 {
        self.size.points()
    }

    pub fn can_split(&self) -> bool {
        self.size.can_split()
    }

    pub fn next_size(&self) -> AsteroidSize {
        self.size.next_smaller()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

impl Entity for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
