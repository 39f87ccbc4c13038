//! Game orchestrator: the core of the simulation.
//!
//! `Game` owns the player, the asteroid and projectile arenas, score and
//! level state, spawn timers and the RNG. The driver feeds it input
//! signals and a frame delta; renderers read it back through accessors
//! or a `GameStateSnapshot`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starship_core::commands::InputSignal;
use starship_core::constants::*;
use starship_core::enums::{AsteroidSize, GamePhase};
use starship_core::events::GameEvent;
use starship_core::state::GameStateSnapshot;
use starship_core::types::{SimTime, Vector2D};

use crate::asteroid::Asteroid;
use crate::config::SimConfig;
use crate::entity::Entity;
use crate::projectile::Projectile;
use crate::starship::Starship;
use crate::systems;
use crate::systems::spawner::SpawnSchedule;

/// One play session. Exclusively owned and driven by the frame loop.
pub struct Game {
    width: f32,
    height: f32,
    player: Starship,
    asteroids: Vec<Asteroid>,
    projectiles: Vec<Projectile>,
    score: u32,
    level: u32,
    phase: GamePhase,
    time: SimTime,
    rng: ChaCha8Rng,
    shoot_cooldown: f32,
    spawn_schedule: SpawnSchedule,
    events: Vec<GameEvent>,
}

impl Game {
    /// Start a session: ship at the field centre and the opening asteroid wave.
    pub fn new(config: SimConfig) -> Self {
        let center = Vector2D::new(config.width / 2.0, config.height / 2.0);
        let mut game = Self {
            width: config.width,
            height: config.height,
            player: Starship::new(center),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            shoot_cooldown: 0.0,
            spawn_schedule: SpawnSchedule::default(),
            events: Vec::new(),
        };
        log::info!(
            "New session on {}x{} field (seed {})",
            config.width,
            config.height,
            config.seed
        );
        game.spawn_asteroids(INITIAL_ASTEROIDS);
        game
    }

    /// Start a session on a `width` x `height` field with the default seed.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(SimConfig {
            width,
            height,
            ..Default::default()
        })
    }

    /// Advance the simulation by one frame of `dt` seconds. No-op after game over.
    pub fn update(&mut self, dt: f32) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }

        // 1. Movement integration (+ out-of-field culling)
        systems::movement::run_player(&mut self.player, dt, self.width, self.height);
        systems::movement::run_asteroids(&mut self.asteroids, dt, self.height);
        systems::movement::run_projectiles(&mut self.projectiles, dt);
        // 2. Collisions (projectile hits + splitting, then player impact)
        let respawn_point = self.center();
        systems::collision::run(
            &mut self.player,
            &mut self.asteroids,
            &mut self.projectiles,
            &mut self.rng,
            &mut self.score,
            respawn_point,
            &mut self.events,
        );
        // 3. Cleanup (inactive asteroids and projectiles)
        systems::cleanup::run(&mut self.asteroids, &mut self.projectiles);
        // 4. Timed spawning
        if self.spawn_schedule.advance(dt) {
            let count = systems::spawner::timed_spawn_count(self.level);
            log::trace!("Timed spawn of {count} asteroids");
            self.spawn_asteroids(count);
        }
        // 5. Level advance on a cleared field
        if self.asteroids.is_empty() && self.player.is_active() {
            self.advance_level();
        }
        // 6. Game over
        if !self.player.is_active() && self.player.health() <= 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over at level {} with score {}", self.level, self.score);
            self.events.push(GameEvent::GameOver {
                score: self.score,
                level: self.level,
            });
        }

        self.time.advance(dt);
    }

    /// Apply one input signal. After game over only `Reset` is honoured.
    pub fn handle_input(&mut self, signal: InputSignal, dt: f32) {
        if self.phase == GamePhase::GameOver {
            if signal == InputSignal::Reset {
                self.reset();
            }
            return;
        }

        match signal {
            InputSignal::MoveLeft => self.player.move_left(SHIP_MOVE_SPEED),
            InputSignal::MoveRight => self.player.move_right(SHIP_MOVE_SPEED),
            InputSignal::StopMoving => self.player.stop_moving(),
            InputSignal::Thrust => self.player.thrust(dt),
            InputSignal::Fire => {
                if self.shoot_cooldown <= 0.0 {
                    self.shoot_projectile();
                    self.shoot_cooldown = SHOOT_DELAY;
                }
            }
            InputSignal::Reset => {}
        }
    }

    /// Return to the exact state of session start. The RNG stream continues,
    /// so the opening wave differs from the previous session's.
    pub fn reset(&mut self) {
        self.player = Starship::new(self.center());
        self.asteroids.clear();
        self.projectiles.clear();
        self.score = 0;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.time = SimTime::default();
        self.shoot_cooldown = 0.0;
        self.spawn_schedule = SpawnSchedule::default();
        self.events.clear();
        self.events.push(GameEvent::SessionReset);
        log::info!("Session reset");
        self.spawn_asteroids(INITIAL_ASTEROIDS);
    }

    /// Spawn `count` Large asteroids along the top edge.
    pub fn spawn_asteroids(&mut self, count: u32) {
        systems::spawner::spawn_wave(&mut self.asteroids, &mut self.rng, count, self.width);
    }

    /// Append one asteroid with explicit kinematics.
    pub fn spawn_asteroid(&mut self, position: Vector2D, velocity: Vector2D, size: AsteroidSize) {
        self.asteroids.push(Asteroid::new(position, velocity, size));
    }

    /// Fire straight up from the ship. Ignores the cooldown; `handle_input` enforces it.
    pub fn shoot_projectile(&mut self) {
        if !self.player.is_active() {
            return;
        }
        let position = self.player.position();
        self.projectiles.push(Projectile::new(
            position,
            Vector2D::new(0.0, -PROJECTILE_SPEED),
        ));
        self.events.push(GameEvent::ProjectileFired {
            x: position.x,
            y: position.y,
        });
    }

    /// Build a read-only snapshot for renderers and tools.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(self)
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn player(&self) -> &Starship {
        &self.player
    }

    /// Direct ship control for input layers (e.g. `stop_moving` when no key is held).
    pub fn player_mut(&mut self) -> &mut Starship {
        &mut self.player
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Remaining shot cooldown in seconds (may be slightly negative).
    pub fn shoot_cooldown(&self) -> f32 {
        self.shoot_cooldown
    }

    /// Mutable access to the asteroid arena (for tests that stage collisions).
    #[cfg(test)]
    pub fn asteroids_mut(&mut self) -> &mut Vec<Asteroid> {
        &mut self.asteroids
    }

    fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }

    fn advance_level(&mut self) {
        self.level += 1;
        let count = systems::spawner::level_wave_count(self.level);
        log::info!("Field cleared, advancing to level {} ({count} asteroids)", self.level);
        self.events.push(GameEvent::LevelAdvanced { level: self.level });
        self.spawn_asteroids(count);
    }
}
