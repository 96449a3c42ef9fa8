use crate::core::random::seed_or_fallback;
use crate::domain::SimulationOptions;
use crate::systems::body::PhysicsBody;
use crate::systems::geometry::RegularPolygon;
use crate::systems::nested::NestedSimulationTree;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// Depth of the visible body
pub(super) const TOP_DEPTH: u32 = 0;

pub(super) fn create_world(options: &SimulationOptions) -> RegularPolygon {
    RegularPolygon::new(
        options.world_center,
        options.world_radius,
        options.sides(),
        options.world_rotation,
    )
}

pub(super) fn create_body(options: &SimulationOptions) -> PhysicsBody {
    PhysicsBody::new(options.body_position.x, options.body_position.y, options.body_radius)
        .with_velocity(options.body_velocity.x, options.body_velocity.y)
        .with_gravity(options.gravity)
        .with_friction(options.friction)
}

pub(super) fn create_simulation_core(options: SimulationOptions) -> SimulationCore {
    let mut rng_state = seed_or_fallback(options.seed);
    let world = create_world(&options);
    let body = create_body(&options);
    let nested = NestedSimulationTree::build(&body, TOP_DEPTH, options.max_depth, &mut rng_state);

    SimulationCore {
        wall_damping: options.wall_damping,
        push_out_margin: options.push_out_margin,
        options,
        world,
        body,
        nested,
        rng_state,
        tick_count: 0,
        world_hits: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
