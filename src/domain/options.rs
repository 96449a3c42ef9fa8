//! Simulation options.
//!
//! Loaded from JSON the host hands over (`SimulationOptions::from_json`) or
//! built in Rust from `Default` plus the `with_*` helpers. Missing JSON
//! fields fall back to the defaults below.
//!
//! ```json
//! {
//!   "world_radius": 250.0,
//!   "initial_sides": 3,
//!   "body_radius": 40.0,
//!   "gravity": 900.0,
//!   "max_depth": 2
//! }
//! ```

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::systems::body::{DEFAULT_FRICTION, DEFAULT_GRAVITY};
use crate::systems::geometry::{clamp_side_count, Vec2};

use super::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    /// World polygon center (canvas pixels)
    pub world_center: Vec2,
    /// World polygon circumradius
    pub world_radius: f64,
    /// Starting side count; truncated and floored at 3
    pub initial_sides: f64,
    /// Rotation of the first world vertex (radians)
    pub world_rotation: f64,

    pub body_position: Vec2,
    pub body_velocity: Vec2,
    pub body_radius: f64,
    /// px/s² along +y
    pub gravity: f64,
    /// Per-60Hz-frame velocity retention
    pub friction: f64,

    /// Velocity multiplier after a world bounce
    pub wall_damping: f64,
    /// Extra push-out past the penetration on a world bounce
    pub push_out_margin: f64,

    /// Nesting gate: 0 = no inner levels, 1 = tier 1 only, >= 2 = both tiers
    pub max_depth: u32,
    /// Seed for nested-level spawn velocities
    pub seed: u32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            world_center: Vec2::zero(),
            world_radius: 250.0,
            initial_sides: 3.0,
            world_rotation: -FRAC_PI_2,
            body_position: Vec2::zero(),
            body_velocity: Vec2::new(150.0, 0.0),
            body_radius: 40.0,
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            wall_damping: 0.98,
            push_out_margin: 0.5,
            max_depth: 2,
            seed: 12345,
        }
    }
}

impl SimulationOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Side count after host-input clamping
    pub fn sides(&self) -> u32 {
        clamp_side_count(self.initial_sides)
    }

    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("world_center.x", self.world_center.x),
            ("world_center.y", self.world_center.y),
            ("world_radius", self.world_radius),
            ("world_rotation", self.world_rotation),
            ("body_position.x", self.body_position.x),
            ("body_position.y", self.body_position.y),
            ("body_velocity.x", self.body_velocity.x),
            ("body_velocity.y", self.body_velocity.y),
            ("body_radius", self.body_radius),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("wall_damping", self.wall_damping),
            ("push_out_margin", self.push_out_margin),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        if self.world_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                field: "world_radius",
                value: self.world_radius,
            });
        }
        if self.body_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                field: "body_radius",
                value: self.body_radius,
            });
        }
        if self.body_radius >= self.world_radius {
            return Err(ConfigError::BodyTooLarge {
                body: self.body_radius,
                world: self.world_radius,
            });
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if self.gravity < 0.0 {
            return Err(ConfigError::NegativeGravity(self.gravity));
        }
        Ok(())
    }

    pub fn with_world(mut self, center: Vec2, radius: f64, sides: u32) -> Self {
        self.world_center = center;
        self.world_radius = radius;
        self.initial_sides = sides as f64;
        self
    }

    pub fn with_world_rotation(mut self, rotation: f64) -> Self {
        self.world_rotation = rotation;
        self
    }

    pub fn with_body(mut self, position: Vec2, velocity: Vec2, radius: f64) -> Self {
        self.body_position = position;
        self.body_velocity = velocity;
        self.body_radius = radius;
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

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
