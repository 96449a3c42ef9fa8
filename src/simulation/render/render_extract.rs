//! Frame extraction for the renderer.
//!
//! Nested tiers are stored in their parent body's frame. The views below
//! carry both: `local` values as simulated, plus `origin`, the world-space
//! point the local frame hangs from, so the renderer never re-derives the
//! chain of offsets.

use serde::Serialize;

use crate::systems::body::PhysicsBody;
use crate::systems::geometry::{RegularPolygon, Vec2};
use crate::systems::nested::NestedLevel;

use super::SimulationCore;

#[derive(Clone, Debug, Serialize)]
pub struct PolygonView {
    pub center: Vec2,
    pub radius: f64,
    pub sides: u32,
    pub rotation: f64,
    pub vertices: Vec<Vec2>,
}

impl PolygonView {
    fn from_polygon(polygon: &RegularPolygon) -> Self {
        Self {
            center: polygon.center(),
            radius: polygon.radius(),
            sides: polygon.sides(),
            rotation: polygon.rotation(),
            vertices: polygon.vertices().to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BodyView {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

impl BodyView {
    fn from_body(body: &PhysicsBody) -> Self {
        Self { pos: body.pos, velocity: body.velocity, radius: body.radius }
    }
}

/// One nested tier, in its parent's local frame
#[derive(Clone, Debug, Serialize)]
pub struct TierView {
    /// World-space position of the local frame's origin (the parent body)
    pub origin: Vec2,
    pub polygon: PolygonView,
    pub body: BodyView,
}

impl TierView {
    fn from_level(level: &NestedLevel, origin: Vec2) -> Self {
        Self {
            origin,
            polygon: PolygonView::from_polygon(&level.polygon()),
            body: BodyView::from_body(&level.body),
        }
    }

    /// World-space body center
    pub fn body_world(&self) -> Vec2 {
        self.origin + self.body.pos
    }

    /// World-space `[x0, y0, x1, y1, ...]`
    pub fn flat_world_vertices(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.polygon.vertices.len() * 2);
        for v in &self.polygon.vertices {
            out.push(self.origin.x + v.x);
            out.push(self.origin.y + v.y);
        }
        out
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub world: PolygonView,
    pub body: BodyView,
    pub inner: Option<TierView>,
    pub deep: Option<TierView>,
}

impl FrameSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub(super) fn snapshot(sim: &SimulationCore) -> FrameSnapshot {
    let inner = sim
        .nested
        .inner()
        .map(|i| TierView::from_level(&i.level, sim.body.pos));
    let deep = match (&inner, sim.nested.deep()) {
        (Some(view), Some(level)) => Some(TierView::from_level(level, view.body_world())),
        _ => None,
    };

    FrameSnapshot {
        tick: sim.tick_count,
        world: PolygonView::from_polygon(&sim.world),
        body: BodyView::from_body(&sim.body),
        inner,
        deep,
    }
}
