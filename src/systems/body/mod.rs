//! PhysicsBody - the circle that bounces
//!
//! Position and velocity live in the frame of whichever level owns the body:
//! world pixels for tier 0, parent-local pixels for the nested tiers.

mod body;

pub use body::{PhysicsBody, DEFAULT_FRICTION, DEFAULT_GRAVITY};
