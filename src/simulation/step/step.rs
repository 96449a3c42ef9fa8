use crate::systems::collision::collide_circle;

use super::bounds::clamp_to_world;
use super::{PerfTimer, SimulationCore};

pub(super) fn tick(sim: &mut SimulationCore, dt: f64) -> bool {
    let timer = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };

    // === TIER 0: the visible body ===
    sim.body.apply_gravity(dt);
    sim.body.integrate(dt);

    let collision = collide_circle(sim.body.pos, sim.body.radius, &sim.world);
    if collision.hit {
        sim.body
            .resolve_collision(&collision, sim.wall_damping, sim.push_out_margin);
        sim.world.grow();
        sim.world_hits += 1;
    }

    clamp_to_world(&mut sim.body, &sim.world);

    // === TIERS 1-2: inside the body ===
    let report = sim.nested.update(sim.body.gravity, dt, &mut sim.rng_state);

    sim.tick_count += 1;

    if let Some(timer) = timer {
        sim.perf_stats.record_tick(
            timer.elapsed_ms(),
            collision.hit,
            report.inner_hit,
            report.deep_hit,
        );
    }

    collision.hit
}
