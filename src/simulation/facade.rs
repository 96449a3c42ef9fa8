use wasm_bindgen::prelude::*;

use crate::domain::SimulationOptions;

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default options
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SimulationCore::new() }
    }

    /// Create a simulation from an options JSON object (missing fields default)
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_options_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Advance one frame; the host clamps `dt` (seconds).
    /// Returns true when the world polygon gained a side.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.core.tick(dt)
    }

    /// Pointer interaction: add `scale * (dx, dy)` to the body velocity
    pub fn apply_impulse(&mut self, dx: f64, dy: f64, scale: f64) {
        self.core.apply_impulse(dx, dy, scale);
    }

    pub fn configure_max_depth(&mut self, max_depth: u32) {
        self.core.configure_max_depth(max_depth);
    }

    /// Rebuild everything from an options JSON object
    pub fn reset(&mut self, json: String) -> Result<(), JsValue> {
        let options = SimulationOptions::from_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .reset(options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Restart with the current options (same seed, same run)
    pub fn restart(&mut self) {
        self.core.restart();
    }

    /// Side-count slider: restart with `sides` (truncated, floored at 3)
    pub fn set_target_sides(&mut self, sides: f64) {
        self.core.set_target_sides(sides);
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    pub fn set_friction(&mut self, friction: f64) {
        self.core.set_friction(friction);
    }

    #[wasm_bindgen(getter)]
    pub fn world_sides(&self) -> u32 { self.core.world_sides() }

    #[wasm_bindgen(getter)]
    pub fn max_depth(&self) -> u32 { self.core.max_depth() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn world_hits(&self) -> u64 { self.core.world_hits() }

    #[wasm_bindgen(getter)]
    pub fn body_x(&self) -> f64 { self.core.body().pos.x }

    #[wasm_bindgen(getter)]
    pub fn body_y(&self) -> f64 { self.core.body().pos.y }

    #[wasm_bindgen(getter)]
    pub fn body_radius(&self) -> f64 { self.core.body().radius }

    /// 0, 1 or 2
    #[wasm_bindgen(getter)]
    pub fn active_tiers(&self) -> u32 { self.core.nested().active_tiers() }

    /// World polygon as `[x0, y0, x1, y1, ...]`
    pub fn world_vertices(&self) -> Vec<f64> {
        self.core.world().flat_vertices()
    }

    /// Tier-1 polygon in world space (empty when inactive)
    pub fn inner_vertices(&self) -> Vec<f64> {
        self.core
            .snapshot()
            .inner
            .map(|t| t.flat_world_vertices())
            .unwrap_or_default()
    }

    /// Tier-2 polygon in world space (empty when inactive)
    pub fn deep_vertices(&self) -> Vec<f64> {
        self.core
            .snapshot()
            .deep
            .map(|t| t.flat_world_vertices())
            .unwrap_or_default()
    }

    /// Full frame (world, body, tiers) as JSON
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot().to_json()
    }

    pub fn options_json(&self) -> String {
        self.core.options().to_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get perf counters (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
