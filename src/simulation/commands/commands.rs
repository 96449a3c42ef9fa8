use crate::core::random::seed_or_fallback;
use crate::domain::{ConfigError, SimulationOptions};
use crate::systems::geometry::{clamp_side_count, Vec2};
use crate::systems::nested::NestedSimulationTree;

use super::init::{create_body, create_world, TOP_DEPTH};
use super::SimulationCore;

pub(super) fn apply_impulse(sim: &mut SimulationCore, dx: f64, dy: f64, scale: f64) {
    sim.body.apply_impulse(Vec2::new(dx, dy) * scale);
}

pub(super) fn configure_max_depth(sim: &mut SimulationCore, max_depth: u32) {
    sim.options.max_depth = max_depth;
    sim.nested = NestedSimulationTree::build(&sim.body, TOP_DEPTH, max_depth, &mut sim.rng_state);
    crate::engine_log!(
        "nested: max depth {} ({} tier(s) active)",
        max_depth,
        sim.nested.active_tiers()
    );
}

pub(super) fn reset(
    sim: &mut SimulationCore,
    options: SimulationOptions,
) -> Result<(), ConfigError> {
    options.validate()?;
    rebuild(sim, options);
    Ok(())
}

/// Rebuild from the installed options (no re-validation)
pub(super) fn restart(sim: &mut SimulationCore) {
    let options = sim.options.clone();
    rebuild(sim, options);
}

pub(super) fn set_target_sides(sim: &mut SimulationCore, sides: f64) {
    let mut options = sim.options.clone();
    options.initial_sides = clamp_side_count(sides) as f64;
    rebuild(sim, options);
}

fn rebuild(sim: &mut SimulationCore, options: SimulationOptions) {
    sim.rng_state = seed_or_fallback(options.seed);
    sim.world = create_world(&options);
    sim.body = create_body(&options);
    sim.nested =
        NestedSimulationTree::build(&sim.body, TOP_DEPTH, options.max_depth, &mut sim.rng_state);
    sim.wall_damping = options.wall_damping;
    sim.push_out_margin = options.push_out_margin;
    sim.tick_count = 0;
    sim.world_hits = 0;
    sim.perf_stats.reset();

    crate::engine_log!(
        "simulation reset: {} sides, max depth {}",
        sim.world.sides(),
        options.max_depth
    );
    sim.options = options;
}
