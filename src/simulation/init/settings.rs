use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

/// Takes effect on the next tick, in the live nested tiers too
pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f64) {
    sim.body.gravity = gravity;
    sim.options.gravity = gravity;
    sim.nested.set_host_gravity(gravity);
}

pub(super) fn set_friction(sim: &mut SimulationCore, friction: f64) {
    sim.body.friction = friction;
    sim.options.friction = friction;
}
