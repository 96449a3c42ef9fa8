//! NestedSimulationTree - mini-simulations living inside the body
//!
//! Tier 0 is the visible body (owned by the simulation core).
//! Tier 1 is an `InnerLevel` inside it; tier 2 is a terminal `NestedLevel`
//! inside tier 1's body. The shape is fixed: there is no tier 3.
//!
//! Each tier's polygon and body are stored in the parent body's local frame,
//! so a renderer adds the parent's position to place them on screen.

mod level;
mod tree;

pub use level::{NestedLevel, TierTuning, DEEP_TUNING, INNER_TUNING, NESTED_ROTATION};
pub use tree::{InnerLevel, NestedReport, NestedSimulationTree};
