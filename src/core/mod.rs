//! Core utilities shared by every system

#[macro_use]
pub mod logging;
pub mod random;
