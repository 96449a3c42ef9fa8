use crate::systems::body::PhysicsBody;
use crate::systems::geometry::RegularPolygon;

/// Keep the body center within `world.radius - body.radius` of the world
/// center. Only a tunnelled body ever trips this; the polygon collision
/// handles normal contact long before.
pub(super) fn clamp_to_world(body: &mut PhysicsBody, world: &RegularPolygon) {
    let limit = world.radius() - body.radius;
    if limit <= 0.0 {
        return;
    }
    let offset = body.pos - world.center();
    let dist = offset.length();
    if dist > limit {
        body.pos = world.center() + offset * (limit / dist);
    }
}
