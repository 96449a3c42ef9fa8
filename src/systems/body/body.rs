use crate::systems::collision::CollisionResult;
use crate::systems::geometry::Vec2;

/// Default downward acceleration (px/s²)
pub const DEFAULT_GRAVITY: f64 = 900.0;
/// Default per-60Hz-frame velocity retention
pub const DEFAULT_FRICTION: f64 = 0.999;

/// Circular body - one per simulation level
#[derive(Clone, Debug)]
pub struct PhysicsBody {
    /// Center, in the owning level's frame
    pub pos: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    pub radius: f64,
    /// px/s², applied along +y
    pub gravity: f64,
    /// Damping base in (0, 1], raised to `dt * 60` each step
    pub friction: f64,
}

impl PhysicsBody {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            radius,
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn apply_gravity(&mut self, dt: f64) {
        self.velocity.y += self.gravity * dt;
    }

    /// Semi-implicit Euler step: move with the current velocity, then damp.
    ///
    /// Damping is `friction^(dt * 60)` so a 30Hz host loses as much speed per
    /// second as a 60Hz one.
    pub fn integrate(&mut self, dt: f64) {
        self.pos += self.velocity * dt;
        let damping = self.friction.powf(dt * 60.0);
        self.velocity = self.velocity * damping;
    }

    /// Nested-tier step: external gravity, move, flat per-step drag.
    ///
    /// Unlike `integrate` the drag is NOT frame-rate normalized.
    pub fn step_with_drag(&mut self, gravity: f64, drag: f64, dt: f64) {
        self.velocity.y += gravity * dt;
        self.pos += self.velocity * dt;
        self.velocity = self.velocity * drag;
    }

    /// Reflect off the contact normal, push clear of the wall, lose energy.
    pub fn resolve_collision(&mut self, collision: &CollisionResult, damping: f64, push_out: f64) {
        if !collision.hit {
            return;
        }
        let n = collision.normal;
        self.velocity = self.velocity - n * (2.0 * self.velocity.dot(n));
        self.pos = self.pos - n * (collision.penetration + push_out);
        self.velocity = self.velocity * damping;
    }

    /// Add an instantaneous velocity change
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }
}
