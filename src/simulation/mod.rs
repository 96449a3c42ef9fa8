//! Simulation - owns the world polygon, the body and the nested tree
//!
//! `SimulationCore` only orchestrates. The physics lives in `systems/`:
//! - geometry/  - vectors, regular polygons
//! - collision/ - circle vs polygon edges
//! - body/      - the bouncing circle
//! - nested/    - tier 1 and tier 2 mini-simulations
//!
//! One `tick(dt)` runs tier 0 → tier 1 → tier 2 to completion. The host
//! clamps dt (≤ 0.033s); nothing here does.

use crate::domain::{ConfigError, SimulationOptions};
use crate::systems::body::PhysicsBody;
use crate::systems::geometry::RegularPolygon;
use crate::systems::nested::NestedSimulationTree;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/bounds.rs"]
mod bounds;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use render_extract::{BodyView, FrameSnapshot, PolygonView, TierView};

use perf_timer::PerfTimer;

/// The simulation state
pub struct SimulationCore {
    options: SimulationOptions,
    world: RegularPolygon,
    body: PhysicsBody,
    nested: NestedSimulationTree,

    // World bounce response
    wall_damping: f64,
    push_out_margin: f64,

    // State
    rng_state: u32,
    tick_count: u64,
    world_hits: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation with default options
    pub fn new() -> Self {
        init::create_simulation_core(SimulationOptions::default())
    }

    /// Create a simulation from validated options
    pub fn from_options(options: SimulationOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(init::create_simulation_core(options))
    }

    pub fn from_options_json(json: &str) -> Result<Self, ConfigError> {
        let options = SimulationOptions::from_json(json)?;
        Ok(init::create_simulation_core(options))
    }

    pub fn options(&self) -> &SimulationOptions { &self.options }

    pub fn world(&self) -> &RegularPolygon { &self.world }

    pub fn body(&self) -> &PhysicsBody { &self.body }

    pub fn nested(&self) -> &NestedSimulationTree { &self.nested }

    pub fn world_sides(&self) -> u32 { self.world.sides() }

    pub fn tick_count(&self) -> u64 { self.tick_count }

    pub fn world_hits(&self) -> u64 { self.world_hits }

    pub fn max_depth(&self) -> u32 { self.nested.max_depth() }

    /// Advance one frame. Returns true if the body hit the world polygon
    /// (which then gained a side).
    pub fn tick(&mut self, dt: f64) -> bool {
        step::tick(self, dt)
    }

    /// Add `scale * (dx, dy)` to the body's velocity
    pub fn apply_impulse(&mut self, dx: f64, dy: f64, scale: f64) {
        commands::apply_impulse(self, dx, dy, scale)
    }

    /// Change the nesting gate; the nested tree is rebuilt from scratch
    pub fn configure_max_depth(&mut self, max_depth: u32) {
        commands::configure_max_depth(self, max_depth)
    }

    /// Rebuild world, body and nested tree from `options`
    pub fn reset(&mut self, options: SimulationOptions) -> Result<(), ConfigError> {
        commands::reset(self, options)
    }

    /// Start over with the current options (same seed, same run)
    pub fn restart(&mut self) {
        commands::restart(self)
    }

    /// Restart with a new world side count, other options unchanged
    pub fn set_target_sides(&mut self, sides: f64) {
        commands::set_target_sides(self, sides)
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_friction(&mut self, friction: f64) {
        settings::set_friction(self, friction);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get perf counters (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Everything a renderer needs for one frame
    pub fn snapshot(&self) -> FrameSnapshot {
        render_extract::snapshot(self)
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
