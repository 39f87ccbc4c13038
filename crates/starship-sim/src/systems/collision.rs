//! Collision system: projectile hits with splitting, then player impacts.
//!
//! Circle-circle overlap only; fast, small bodies can tunnel between frames.

use rand_chacha::ChaCha8Rng;

use starship_core::events::GameEvent;
use starship_core::types::Vector2D;

use crate::asteroid::Asteroid;
use crate::entity::Entity;
use crate::projectile::Projectile;
use crate::starship::Starship;
use crate::systems::spawner;

/// Run both collision passes in order.
pub fn run(
    player: &mut Starship,
    asteroids: &mut Vec<Asteroid>,
    projectiles: &mut [Projectile],
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    respawn_point: Vector2D,
    events: &mut Vec<GameEvent>,
) {
    resolve_projectile_hits(asteroids, projectiles, rng, score, events);
    resolve_player_hit(player, asteroids, respawn_point, events);
}

/// Each active projectile destroys at most one asteroid: the first active one
/// it overlaps in arena order. Fragments are appended immediately, so later
/// projectiles in the same pass can hit them.
pub fn resolve_projectile_hits(
    asteroids: &mut Vec<Asteroid>,
    projectiles: &mut [Projectile],
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    for projectile in projectiles.iter_mut().filter(|p| p.is_active()) {
        let hit = (0..asteroids.len())
            .find(|&i| asteroids[i].is_active() && projectile.collides_with(&asteroids[i]));
        let Some(index) = hit else {
            continue;
        };

        projectile.set_active(false);
        asteroids[index].set_active(false);
        let destroyed = asteroids[index];

        *score += destroyed.points();
        let pos = destroyed.position();
        log::debug!(
            "{:?} asteroid destroyed at ({:.1}, {:.1}) for {} points",
            destroyed.size(),
            pos.x,
            pos.y,
            destroyed.points()
        );
        events.push(GameEvent::AsteroidDestroyed {
            size: destroyed.size(),
            points: destroyed.points(),
            x: pos.x,
            y: pos.y,
        });

        let fragments = spawner::spawn_fragments(asteroids, rng, &destroyed);
        if fragments > 0 {
            events.push(GameEvent::AsteroidSplit {
                size: destroyed.next_size(),
                fragments,
            });
        }
    }
}

/// The player takes at most one hit per frame. The asteroid that hit is
/// destroyed without scoring or splitting; a surviving ship respawns at
/// `respawn_point`.
pub fn resolve_player_hit(
    player: &mut Starship,
    asteroids: &mut [Asteroid],
    respawn_point: Vector2D,
    events: &mut Vec<GameEvent>,
) {
    if !player.is_active() {
        return;
    }

    let Some(asteroid) = asteroids
        .iter_mut()
        .find(|a| a.is_active() && player.collides_with(&**a))
    else {
        return;
    };

    asteroid.set_active(false);
    player.take_damage();
    log::debug!("Player hit, health now {}", player.health());
    events.push(GameEvent::PlayerHit {
        health_remaining: player.health(),
    });

    if player.health() > 0 {
        player.respawn(respawn_point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use starship_core::enums::AsteroidSize;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    fn asteroid_at(x: f32, y: f32, size: AsteroidSize) -> Asteroid {
        Asteroid::new(Vector2D::new(x, y), Vector2D::new(0.0, 20.0), size)
    }

    fn shot_at(x: f32, y: f32) -> Projectile {
        Projectile::new(Vector2D::new(x, y), Vector2D::new(0.0, -300.0))
    }

    fn live<E: Entity>(entities: &[E]) -> usize {
        entities.iter().filter(|e| e.is_active()).count()
    }

    #[test]
    fn test_large_splits_into_two_medium() {
        let mut asteroids = vec![asteroid_at(100.0, 100.0, AsteroidSize::Large)];
        let mut projectiles = vec![shot_at(105.0, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        resolve_projectile_hits(&mut asteroids, &mut projectiles, &mut rng(), &mut score, &mut events);

        assert_eq!(score, 20);
        assert!(!projectiles[0].is_active());
        assert!(!asteroids[0].is_active());
        let fragments: Vec<_> = asteroids.iter().filter(|a| a.is_active()).collect();
        assert_eq!(fragments.len(), 2);
        assert!(fragments.iter().all(|f| f.size() == AsteroidSize::Medium));
        assert!(events.contains(&GameEvent::AsteroidSplit {
            size: AsteroidSize::Medium,
            fragments: 2,
        }));
    }

    #[test]
    fn test_medium_splits_into_two_small() {
        let mut asteroids = vec![asteroid_at(100.0, 100.0, AsteroidSize::Medium)];
        let mut projectiles = vec![shot_at(100.0, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        resolve_projectile_hits(&mut asteroids, &mut projectiles, &mut rng(), &mut score, &mut events);

        assert_eq!(score, 50);
        let fragments: Vec<_> = asteroids.iter().filter(|a| a.is_active()).collect();
        assert_eq!(fragments.len(), 2);
        assert!(fragments.iter().all(|f| f.size() == AsteroidSize::Small));
    }

    #[test]
    fn test_small_does_not_split() {
        let mut asteroids = vec![asteroid_at(100.0, 100.0, AsteroidSize::Small)];
        let mut projectiles = vec![shot_at(100.0, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        resolve_projectile_hits(&mut asteroids, &mut projectiles, &mut rng(), &mut score, &mut events);

        assert_eq!(score, 100);
        assert_eq!(asteroids.len(), 1);
        assert_eq!(live(&asteroids), 0);
        assert_eq!(events.len(), 1, "a small asteroid only reports its destruction");
    }

    #[test]
    fn test_one_asteroid_per_projectile() {
        // Two overlapping smalls under a single shot: only the first in order dies.
        let mut asteroids = vec![
            asteroid_at(100.0, 100.0, AsteroidSize::Small),
            asteroid_at(101.0, 100.0, AsteroidSize::Small),
        ];
        let mut projectiles = vec![shot_at(100.5, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        resolve_projectile_hits(&mut asteroids, &mut projectiles, &mut rng(), &mut score, &mut events);

        assert_eq!(score, 100);
        assert!(!asteroids[0].is_active());
        assert!(asteroids[1].is_active());
    }

    #[test]
    fn test_second_projectile_can_hit_fresh_fragment() {
        let mut asteroids = vec![asteroid_at(100.0, 100.0, AsteroidSize::Large)];
        let mut projectiles = vec![shot_at(100.0, 100.0), shot_at(100.0, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        resolve_projectile_hits(&mut asteroids, &mut projectiles, &mut rng(), &mut score, &mut events);

        assert_eq!(score, 20 + 50);
        assert_eq!(live(&projectiles), 0);
        // Large gone, one Medium gone, one Medium left, two Smalls added.
        assert_eq!(live(&asteroids), 3);
    }

    #[test]
    fn test_inactive_entities_are_ignored() {
        let mut asteroids = vec![asteroid_at(100.0, 100.0, AsteroidSize::Large)];
        asteroids[0].set_active(false);
        let mut projectiles = vec![shot_at(100.0, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        resolve_projectile_hits(&mut asteroids, &mut projectiles, &mut rng(), &mut score, &mut events);

        assert_eq!(score, 0);
        assert!(projectiles[0].is_active());
        assert!(events.is_empty());
    }

    #[test]
    fn test_player_hit_damages_and_respawns() {
        let mut player = Starship::new(Vector2D::new(400.0, 570.0));
        let mut asteroids = vec![
            asteroid_at(400.0, 570.0, AsteroidSize::Large),
            asteroid_at(405.0, 570.0, AsteroidSize::Large),
        ];
        let center = Vector2D::new(400.0, 300.0);
        let mut events = Vec::new();

        resolve_player_hit(&mut player, &mut asteroids, center, &mut events);

        assert_eq!(player.health(), 2);
        assert_eq!(player.position(), center);
        assert!(!asteroids[0].is_active());
        assert!(asteroids[1].is_active(), "only one hit per frame");
        assert_eq!(events, vec![GameEvent::PlayerHit { health_remaining: 2 }]);
    }

    #[test]
    fn test_fatal_hit_does_not_respawn() {
        let mut player = Starship::new(Vector2D::new(400.0, 570.0));
        player.take_damage();
        player.take_damage();
        let mut asteroids = vec![asteroid_at(400.0, 570.0, AsteroidSize::Small)];
        let mut events = Vec::new();

        resolve_player_hit(
            &mut player,
            &mut asteroids,
            Vector2D::new(400.0, 300.0),
            &mut events,
        );

        assert_eq!(player.health(), 0);
        assert!(!player.is_active());
        assert_eq!(player.position(), Vector2D::new(400.0, 570.0));
    }

    #[test]
    fn test_inactive_player_takes_no_hits() {
        let mut player = Starship::new(Vector2D::new(400.0, 570.0));
        player.set_active(false);
        let mut asteroids = vec![asteroid_at(400.0, 570.0, AsteroidSize::Large)];
        let mut events = Vec::new();

        resolve_player_hit(&mut player, &mut asteroids, Vector2D::ZERO, &mut events);

        assert_eq!(player.health(), 3, "a downed ship cannot be damaged");
        assert!(asteroids[0].is_active());
        assert!(events.is_empty());
    }
}
