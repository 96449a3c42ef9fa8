//! Geometry - vectors and regular polygons
//!
//! Everything here is in canvas pixels with y pointing down.

mod vec2;
mod polygon;

pub use vec2::Vec2;
pub use polygon::{clamp_side_count, RegularPolygon, MIN_SIDES};
