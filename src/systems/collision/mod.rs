//! Collision math - pure functions, no state
//!
//! Circle vs regular-polygon edges, nearest edge only. The result feeds
//! `PhysicsBody::resolve_collision` and the polygon growth rule.

mod segment;
mod circle;

pub use segment::closest_point_on_segment;
pub use circle::{collide_circle, CollisionResult, CONTACT_EPSILON};
