use std::f64::consts::FRAC_PI_2;

use crate::systems::body::PhysicsBody;
use crate::systems::collision::collide_circle;
use crate::systems::geometry::{RegularPolygon, Vec2};

/// Fixed orientation of every nested polygon (first vertex straight down)
pub const NESTED_ROTATION: f64 = FRAC_PI_2;

/// Per-tier constants (tier 1 and tier 2 differ in every field)
#[derive(Clone, Copy, Debug)]
pub struct TierTuning {
    /// Multiplier on the parent's gravity
    pub gravity_scale: f64,
    /// Flat per-step velocity retention (1.0 = none)
    pub drag: f64,
    /// Extra distance added to the penetration on push-out
    pub push_out: f64,
    /// Velocity multiplier after a bounce
    pub damping: f64,
    /// Side count stops growing here
    pub side_cap: u32,
}

pub const INNER_TUNING: TierTuning = TierTuning {
    gravity_scale: 0.5,
    drag: 0.999,
    push_out: 0.5,
    damping: 0.98,
    side_cap: 20,
};

pub const DEEP_TUNING: TierTuning = TierTuning {
    gravity_scale: 0.18,
    drag: 1.0,
    push_out: 0.2,
    damping: 0.98,
    side_cap: 30,
};

/// One nested mini-simulation: a polygon and the body bouncing inside it,
/// both expressed in the parent body's local frame.
#[derive(Clone, Debug)]
pub struct NestedLevel {
    /// Polygon center, relative to the parent body
    pub center: Vec2,
    pub radius: f64,
    pub sides: u32,
    pub body: PhysicsBody,
}

impl NestedLevel {
    /// Polygon for this tick, built from the current center/radius/sides
    pub fn polygon(&self) -> RegularPolygon {
        RegularPolygon::new(self.center, self.radius, self.sides, NESTED_ROTATION)
    }

    /// Advance one tick against this level's own polygon.
    ///
    /// Returns true when the body hit a wall (and the level grew a side,
    /// unless already at the cap).
    pub fn step(&mut self, parent_gravity: f64, dt: f64, tuning: &TierTuning) -> bool {
        self.body
            .step_with_drag(parent_gravity * tuning.gravity_scale, tuning.drag, dt);

        let polygon = self.polygon();
        let collision = collide_circle(self.body.pos, self.body.radius, &polygon);
        if !collision.hit {
            return false;
        }

        self.body
            .resolve_collision(&collision, tuning.damping, tuning.push_out);
        if self.sides < tuning.side_cap {
            self.sides += 1;
        }
        true
    }
}
