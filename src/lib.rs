//! Polybounce Engine - growing-polygon bouncer in WASM
//!
//! A circle bounces inside a regular polygon that gains a side on every
//! wall hit. The circle carries up to two nested mini-simulations of itself.
//!
//! Architecture:
//! - core/       - logging macro, RNG
//! - domain/     - options and configuration errors
//! - systems/    - geometry, collision, body, nested tiers
//! - simulation/ - orchestration + wasm facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::body;
pub use systems::collision;
pub use systems::geometry;
pub use systems::nested;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use log as __log;
#[doc(hidden)]
pub use web_sys as __web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Polybounce engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ConfigError, SimulationOptions};
pub use simulation::{FrameSnapshot, Simulation, SimulationCore};
