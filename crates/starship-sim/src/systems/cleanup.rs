//! Cleanup system: reclaims inactive asteroids and projectiles.

use crate::asteroid::Asteroid;
use crate::entity::Entity;
use crate::projectile::Projectile;

/// Compact both arenas once per frame, preserving order of the survivors.
pub fn run(asteroids: &mut Vec<Asteroid>, projectiles: &mut Vec<Projectile>) {
    asteroids.retain(|a| a.is_active());
    projectiles.retain(|p| p.is_active());
}
