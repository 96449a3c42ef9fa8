use crate::systems::geometry::{RegularPolygon, Vec2};

use super::segment::closest_point_on_segment;

/// Slack on the hit test so exact tangency is not lost to float jitter
pub const CONTACT_EPSILON: f64 = 1e-4;

/// Outcome of one circle-vs-polygon query. Recomputed every tick, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResult {
    pub hit: bool,
    /// Index of the nearest edge (vertex `i` to vertex `i + 1`)
    pub edge_index: usize,
    /// Closest point on the nearest edge
    pub contact: Vec2,
    /// Unit normal pointing away from the polygon interior
    pub normal: Vec2,
    /// `radius - distance`; only meaningful when `hit`
    pub penetration: f64,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            edge_index: 0,
            contact: Vec2::zero(),
            normal: Vec2::zero(),
            penetration: 0.0,
        }
    }
}

#[derive(Clone, Copy)]
struct NearestEdge {
    index: usize,
    start: Vec2,
    end: Vec2,
    contact: Vec2,
    distance: f64,
}

/// Test a circle against every edge of `polygon` and resolve only the nearest.
///
/// Near a corner the circle may overlap two edges; the closer one wins and
/// the other is left for a later tick.
pub fn collide_circle(center: Vec2, radius: f64, polygon: &RegularPolygon) -> CollisionResult {
    let nearest = polygon
        .edges()
        .enumerate()
        .fold(None, |best: Option<NearestEdge>, (index, (start, end))| {
            let contact = closest_point_on_segment(center, start, end);
            let distance = center.distance(contact);
            match best {
                Some(b) if b.distance <= distance => Some(b),
                _ => Some(NearestEdge { index, start, end, contact, distance }),
            }
        });

    let Some(edge) = nearest else {
        return CollisionResult::miss();
    };
    if edge.distance > radius + CONTACT_EPSILON {
        return CollisionResult::miss();
    }

    let mut normal = (edge.end - edge.start).perp().normalize_or_self();
    if normal.dot(edge.contact - polygon.center()) < 0.0 {
        normal = -normal;
    }

    CollisionResult {
        hit: true,
        edge_index: edge.index,
        contact: edge.contact,
        normal,
        penetration: radius - edge.distance,
    }
}
