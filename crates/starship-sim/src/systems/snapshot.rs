//! Snapshot system: builds a complete GameStateSnapshot from the game.
//!
//! This system is read-only; it never modifies the game.

use starship_core::state::*;

use crate::asteroid::Asteroid;
use crate::engine::Game;
use crate::entity::Entity;
use crate::projectile::Projectile;
use crate::starship::Starship;

/// Build a complete GameStateSnapshot from the current game state.
pub fn build_snapshot(game: &Game) -> GameStateSnapshot {
    GameStateSnapshot {
        time: game.time(),
        phase: game.phase(),
        score: game.score(),
        level: game.level(),
        width: game.width(),
        height: game.height(),
        player: build_player(game.player()),
        asteroids: game.asteroids().iter().map(build_asteroid).collect(),
        projectiles: game.projectiles().iter().map(build_projectile).collect(),
    }
}

fn build_player(player: &Starship) -> PlayerView {
    PlayerView {
        position: player.position(),
        rotation: player.rotation(),
        health: player.health(),
        active: player.is_active(),
    }
}

fn build_asteroid(asteroid: &Asteroid) -> AsteroidView {
    AsteroidView {
        position: asteroid.position(),
        radius: asteroid.radius(),
        size: asteroid.size(),
    }
}

fn build_projectile(projectile: &Projectile) -> ProjectileView {
    ProjectileView {
        position: projectile.position(),
    }
}
