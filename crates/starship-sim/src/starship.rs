//! The player ship.
//!
//! The ship rides a horizontal track near the bottom of the field:
//! `apply_boundaries` pins its height every frame, so only horizontal
//! motion survives. Rotation only steers `thrust`, whose vertical
//! component the track discards.

use starship_core::constants::*;
use starship_core::types::{from_polar, Vector2D};

use crate::entity::{Body, Entity};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Starship {
    body: Body,
    /// Facing in radians, 0 = +x.
    rotation: f32,
    thrust_power: f32,
    health: i32,
}

impl Starship {
    pub fn new(position: Vector2D) -> Self {
        Self {
            body: Body::new(position, SHIP_RADIUS),
            rotation: 0.0,
            thrust_power: SHIP_THRUST_POWER,
            health: SHIP_INITIAL_HEALTH,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Unit vector along the current facing.
    pub fn forward(&self) -> Vector2D {
        from_polar(self.rotation, 1.0)
    }

    pub fn rotate_left(&mut self, dt: f32) {
        self.rotation -= SHIP_ROTATION_RATE * dt;
    }

    pub fn rotate_right(&mut self, dt: f32) {
        self.rotation += SHIP_ROTATION_RATE * dt;
    }

    pub fn move_left(&mut self, speed: f32) {
        self.body.velocity.x = -speed;
    }

    pub fn move_right(&mut self, speed: f32) {
        self.body.velocity.x = speed;
    }

    pub fn stop_moving(&mut self) {
        self.body.velocity.x = 0.0;
    }

    /// Accelerate along the facing, then cap the speed.
    pub fn thrust(&mut self, dt: f32) {
        self.body.velocity += self.forward() * self.thrust_power * dt;
        if self.body.velocity.length() > SHIP_MAX_SPEED {
            self.body.velocity = self.body.velocity.normalize_or_zero() * SHIP_MAX_SPEED;
        }
    }

    /// Linear decay. Not clamped: a frame of 2s or more flips the sign.
    pub fn apply_drag(&mut self, dt: f32) {
        self.body.velocity = self.body.velocity * (1.0 - SHIP_DRAG * dt);
    }

    /// Keep the hull inside the side walls and on its track.
    pub fn apply_boundaries(&mut self, width: f32, height: f32) {
        let radius = self.body.radius;
        if self.body.position.x < radius {
            self.body.position.x = radius;
        }
        if self.body.position.x > width - radius {
            self.body.position.x = width - radius;
        }
        self.body.position.y = height - SHIP_TRACK_OFFSET;
        self.body.velocity.y = 0.0;
    }

    pub fn take_damage(&mut self) {
        self.health -= 1;
        if self.health <= 0 {
            self.body.active = false;
        }
    }

    /// Back in play at `position`, at rest and facing +x. Health is untouched.
    pub fn respawn(&mut self, position: Vector2D) {
        self.body.position = position;
        self.body.velocity = Vector2D::ZERO;
        self.rotation = 0.0;
        self.body.active = true;
    }
}

impl Entity for Starship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Starship {
        Starship::new(Vector2D::new(400.0, 300.0))
    }

    #[test]
    fn test_new_ship_defaults() {
        let s = ship();
        assert_eq!(s.health(), 3);
        assert_eq!(s.radius(), 1.0);
        assert_eq!(s.rotation(), 0.0);
        assert!(s.is_active());
    }

    #[test]
    fn test_rotation() {
        let mut s = ship();
        s.rotate_right(0.5);
        assert!((s.rotation() - 1.5).abs() < 1e-6);
        s.rotate_left(1.0);
        assert!((s.rotation() + 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_move_and_stop_only_touch_horizontal_velocity() {
        let mut s = ship();
        s.set_velocity(Vector2D::new(0.0, 7.0));
        s.move_left(150.0);
        assert_eq!(s.velocity(), Vector2D::new(-150.0, 7.0));
        s.move_right(150.0);
        assert_eq!(s.velocity(), Vector2D::new(150.0, 7.0));
        s.stop_moving();
        assert_eq!(s.velocity(), Vector2D::new(0.0, 7.0));
    }

    #[test]
    fn test_thrust_accelerates_along_facing() {
        let mut s = ship();
        s.thrust(0.1);
        assert!((s.velocity() - Vector2D::new(5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_thrust_caps_speed() {
        let mut s = ship();
        for _ in 0..100 {
            s.thrust(0.1);
        }
        assert!((s.velocity().length() - SHIP_MAX_SPEED).abs() < 1e-3);

        // An already fast ship is rescaled, keeping its direction.
        let mut fast = ship();
        fast.set_velocity(Vector2D::new(0.0, 100.0));
        fast.thrust(0.0);
        assert!((fast.velocity() - Vector2D::new(0.0, SHIP_MAX_SPEED)).length() < 1e-3);
    }

    #[test]
    fn test_drag() {
        let mut s = ship();
        s.set_velocity(Vector2D::new(100.0, -40.0));
        s.apply_drag(0.1);
        assert!((s.velocity() - Vector2D::new(95.0, -38.0)).length() < 1e-4);

        // Oversized steps invert the velocity; the formula is kept as-is.
        let mut big = ship();
        big.set_velocity(Vector2D::new(10.0, 0.0));
        big.apply_drag(4.0);
        assert!((big.velocity() - Vector2D::new(-10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_boundaries_clamp_and_pin() {
        let mut s = ship();
        s.set_position(Vector2D::new(-50.0, 100.0));
        s.set_velocity(Vector2D::new(-10.0, 25.0));
        s.apply_boundaries(800.0, 600.0);
        assert_eq!(s.position(), Vector2D::new(1.0, 570.0));
        assert_eq!(s.velocity(), Vector2D::new(-10.0, 0.0));

        s.set_position(Vector2D::new(900.0, 0.0));
        s.apply_boundaries(800.0, 600.0);
        assert_eq!(s.position(), Vector2D::new(799.0, 570.0));
    }

    #[test]
    fn test_damage_and_death() {
        let mut s = ship();
        s.take_damage();
        assert_eq!(s.health(), 2);
        assert!(s.is_active());
        s.take_damage();
        s.take_damage();
        assert_eq!(s.health(), 0);
        assert!(!s.is_active());
    }

    #[test]
    fn test_respawn_resets_motion_not_health() {
        let mut s = ship();
        s.rotate_right(1.0);
        s.set_velocity(Vector2D::new(30.0, 0.0));
        s.take_damage();
        s.respawn(Vector2D::new(10.0, 20.0));

        assert_eq!(s.position(), Vector2D::new(10.0, 20.0));
        assert_eq!(s.velocity(), Vector2D::ZERO);
        assert_eq!(s.rotation(), 0.0);
        assert_eq!(s.health(), 2);
        assert!(s.is_active());
    }
}
