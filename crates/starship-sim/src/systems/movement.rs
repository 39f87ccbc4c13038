//! Kinematic integration system.
//!
//! Advances every active entity by one frame and flags the ones that have
//! left the play field for cleanup.

use starship_core::constants::{ASTEROID_CULL_MARGIN, PROJECTILE_CULL_MARGIN};

use crate::asteroid::Asteroid;
use crate::entity::Entity;
use crate::projectile::Projectile;
use crate::starship::Starship;

/// Integrate, drag and confine the player. Skipped while the ship is down.
pub fn run_player(player: &mut Starship, dt: f32, width: f32, height: f32) {
    if !player.is_active() {
        return;
    }
    player.update(dt);
    player.apply_drag(dt);
    player.apply_boundaries(width, height);
}

/// Integrate asteroids; deactivate those that fell past the bottom margin.
pub fn run_asteroids(asteroids: &mut [Asteroid], dt: f32, height: f32) {
    for asteroid in asteroids.iter_mut().filter(|a| a.is_active()) {
        asteroid.update(dt);
        if asteroid.position().y > height + ASTEROID_CULL_MARGIN {
            asteroid.set_active(false);
        }
    }
}

/// Integrate projectiles; deactivate those that flew past the top margin.
/// Expiry by lifetime happens inside `Projectile::update`.
pub fn run_projectiles(projectiles: &mut [Projectile], dt: f32) {
    for projectile in projectiles.iter_mut().filter(|p| p.is_active()) {
        projectile.update(dt);
        if projectile.position().y < -PROJECTILE_CULL_MARGIN {
            projectile.set_active(false);
        }
    }
}
