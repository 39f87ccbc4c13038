//! Simulation constants and tuning parameters.

// --- Field ---

/// Default play-field width.
pub const DEFAULT_WIDTH: f32 = 800.0;

/// Default play-field height.
pub const DEFAULT_HEIGHT: f32 = 600.0;

/// Largest frame delta a driver should pass to `update` (seconds).
/// Larger wall-clock gaps are clamped by the caller to bound integration error.
pub const MAX_FRAME_DT: f32 = 0.1;

// --- Starship ---

/// Collision radius of the player ship.
pub const SHIP_RADIUS: f32 = 1.0;

/// Starting health (lives).
pub const SHIP_INITIAL_HEALTH: i32 = 3;

/// Acceleration applied by `thrust` (units/s²).
pub const SHIP_THRUST_POWER: f32 = 50.0;

/// Speed cap after thrust (units/s).
pub const SHIP_MAX_SPEED: f32 = 40.0;

/// Rotation rate (radians/s).
pub const SHIP_ROTATION_RATE: f32 = 3.0;

/// Linear drag coefficient: velocity *= 1 - SHIP_DRAG * dt.
pub const SHIP_DRAG: f32 = 0.5;

/// Horizontal speed used by the move inputs (units/s).
pub const SHIP_MOVE_SPEED: f32 = 150.0;

/// Distance of the ship's track above the bottom edge.
pub const SHIP_TRACK_OFFSET: f32 = 30.0;

// --- Projectiles ---

/// Collision radius of a projectile.
pub const PROJECTILE_RADIUS: f32 = 0.3;

/// Projectile lifetime before it expires (seconds).
pub const PROJECTILE_MAX_LIFETIME: f32 = 2.0;

/// Upward projectile speed (units/s).
pub const PROJECTILE_SPEED: f32 = 300.0;

/// Minimum time between shots (seconds).
pub const SHOOT_DELAY: f32 = 0.3;

/// Projectiles are culled once `y < -PROJECTILE_CULL_MARGIN`.
pub const PROJECTILE_CULL_MARGIN: f32 = 10.0;

// --- Asteroids ---

pub const ASTEROID_LARGE_RADIUS: f32 = 20.0;
pub const ASTEROID_MEDIUM_RADIUS: f32 = 12.0;
pub const ASTEROID_SMALL_RADIUS: f32 = 6.0;

pub const ASTEROID_LARGE_POINTS: u32 = 20;
pub const ASTEROID_MEDIUM_POINTS: u32 = 50;
pub const ASTEROID_SMALL_POINTS: u32 = 100;

/// Cosmetic spin rate carried by every asteroid (degrees/s). Not used by physics.
pub const ASTEROID_ROTATION_SPEED: f32 = 45.0;

/// Asteroids are culled once `y > height + ASTEROID_CULL_MARGIN`.
pub const ASTEROID_CULL_MARGIN: f32 = 50.0;

/// Spawn row for new asteroids (just above the top edge).
pub const ASTEROID_SPAWN_Y: f32 = -20.0;

/// Descent speed range for fresh asteroids (units/s, half-open).
pub const ASTEROID_MIN_SPEED: f32 = 10.0;
pub const ASTEROID_MAX_SPEED: f32 = 30.0;

/// Horizontal drift half-angle for fresh asteroids (radians).
pub const ASTEROID_DRIFT_ANGLE: f32 = 0.2;

/// Fragments per split.
pub const SPLIT_FRAGMENTS: usize = 2;

/// Heading jitter half-range applied to each fragment (radians).
pub const SPLIT_ANGLE_SPREAD: f32 = 0.5;

/// Fragment speed relative to the parent.
pub const SPLIT_SPEED_FACTOR: f32 = 1.2;

// --- Spawning & levels ---

/// Large asteroids present at session start.
pub const INITIAL_ASTEROIDS: u32 = 8;

/// Seconds between timed spawns.
pub const SPAWN_INTERVAL: f32 = 2.0;

/// Base asteroid count of a level-clear wave; `LEVEL_WAVE_PER_LEVEL` is added per level.
pub const LEVEL_WAVE_BASE: u32 = 6;
pub const LEVEL_WAVE_PER_LEVEL: u32 = 2;

/// Every `TIMED_SPAWN_LEVEL_STEP` levels adds one asteroid to each timed spawn.
pub const TIMED_SPAWN_LEVEL_STEP: u32 = 3;
