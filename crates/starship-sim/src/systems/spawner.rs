//! Asteroid spawning: fresh waves from the top edge, timed trickle,
//! level-clear waves, and split fragments.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starship_core::constants::*;
use starship_core::enums::AsteroidSize;
use starship_core::types::{from_polar, heading, Vector2D};

use crate::asteroid::Asteroid;
use crate::entity::Entity;

/// Fixed-interval timer driving the continuous trickle of new asteroids.
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    pub interval_secs: f32,
    /// Time accumulated since the last timed spawn.
    pub elapsed_secs: f32,
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        Self {
            interval_secs: SPAWN_INTERVAL,
            elapsed_secs: 0.0,
        }
    }
}

impl SpawnSchedule {
    /// Accumulate `dt`; returns true (and restarts from zero) once the interval is reached.
    /// Overshoot is discarded, so at most one spawn fires per frame.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed_secs += dt;
        if self.elapsed_secs >= self.interval_secs {
            self.elapsed_secs = 0.0;
            true
        } else {
            false
        }
    }
}

/// Asteroids per timed spawn: one more every three levels.
pub fn timed_spawn_count(level: u32) -> u32 {
    1 + level / TIMED_SPAWN_LEVEL_STEP
}

/// Asteroids in the wave that follows clearing the field, for the new level.
pub fn level_wave_count(level: u32) -> u32 {
    LEVEL_WAVE_BASE + level * LEVEL_WAVE_PER_LEVEL
}

/// Append `count` Large asteroids entering from the top edge.
pub fn spawn_wave(asteroids: &mut Vec<Asteroid>, rng: &mut ChaCha8Rng, count: u32, width: f32) {
    asteroids.reserve(count as usize);
    for _ in 0..count {
        asteroids.push(entering_asteroid(rng, width));
    }
}

/// A Large asteroid at a random column above the field, falling with slight drift.
pub fn entering_asteroid(rng: &mut ChaCha8Rng, width: f32) -> Asteroid {
    let x = rng.gen::<f32>() * width;
    let speed: f32 = rng.gen_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
    let drift: f32 = rng.gen_range(-ASTEROID_DRIFT_ANGLE..ASTEROID_DRIFT_ANGLE);

    Asteroid::new(
        Vector2D::new(x, ASTEROID_SPAWN_Y),
        Vector2D::new(drift.sin() * speed, speed),
        AsteroidSize::Large,
    )
}

/// Append the fragments of a destroyed asteroid. Returns how many were spawned
/// (zero for Small parents).
///
/// Each fragment keeps the parent's position, takes the parent's heading plus an
/// independent jitter, and moves 20% faster than the parent.
pub fn spawn_fragments(asteroids: &mut Vec<Asteroid>, rng: &mut ChaCha8Rng, parent: &Asteroid) -> u32 {
    if !parent.can_split() {
        return 0;
    }

    let size = parent.next_size();
    let base_heading = heading(parent.velocity());
    let speed = parent.velocity().length() * SPLIT_SPEED_FACTOR;

    for _ in 0..SPLIT_FRAGMENTS {
        let angle = base_heading + rng.gen_range(-SPLIT_ANGLE_SPREAD..SPLIT_ANGLE_SPREAD);
        asteroids.push(Asteroid::new(parent.position(), from_polar(angle, speed), size));
    }
    SPLIT_FRAGMENTS as u32
}
