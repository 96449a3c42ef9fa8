use wasm_bindgen::prelude::*;

/// Per-run counters, collected only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) last_tick_ms: f64,
    pub(super) max_tick_ms: f64,
    pub(super) total_tick_ms: f64,
    pub(super) ticks: u32,
    pub(super) world_hits: u32,
    pub(super) inner_hits: u32,
    pub(super) deep_hits: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_tick(
        &mut self,
        ms: f64,
        world_hit: bool,
        inner_hit: bool,
        deep_hit: bool,
    ) {
        self.last_tick_ms = ms;
        self.max_tick_ms = self.max_tick_ms.max(ms);
        self.total_tick_ms += ms;
        self.ticks = self.ticks.saturating_add(1);
        self.world_hits = self.world_hits.saturating_add(world_hit as u32);
        self.inner_hits = self.inner_hits.saturating_add(inner_hit as u32);
        self.deep_hits = self.deep_hits.saturating_add(deep_hit as u32);
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.last_tick_ms }

    #[wasm_bindgen(getter)]
    pub fn max_tick_ms(&self) -> f64 { self.max_tick_ms }

    #[wasm_bindgen(getter)]
    pub fn avg_tick_ms(&self) -> f64 {
        if self.ticks == 0 { 0.0 } else { self.total_tick_ms / self.ticks as f64 }
    }

    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 { self.ticks }

    #[wasm_bindgen(getter)]
    pub fn world_hits(&self) -> u32 { self.world_hits }

    #[wasm_bindgen(getter)]
    pub fn inner_hits(&self) -> u32 { self.inner_hits }

    #[wasm_bindgen(getter)]
    pub fn deep_hits(&self) -> u32 { self.deep_hits }
}
