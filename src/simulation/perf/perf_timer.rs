//! Tick stopwatch: `Date.now()` in the browser, `Instant` natively.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn stamp() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn stamp() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn millis_since(start: &Stamp) -> f64 {
    js_sys::Date::now() - start
}

#[cfg(not(target_arch = "wasm32"))]
fn millis_since(start: &Stamp) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started: stamp() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_since(&self.started).max(0.0)
    }
}
