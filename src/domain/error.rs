//! Construction-time configuration errors.
//!
//! The tick path never fails; only building a simulation from options can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Options JSON did not parse
    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A radius that must be strictly positive was not
    #[error("{field} must be > 0 (got {value})")]
    NonPositiveRadius { field: &'static str, value: f64 },

    /// The body cannot fit inside the world polygon
    #[error("Body radius {body} does not fit inside world radius {world}")]
    BodyTooLarge { body: f64, world: f64 },

    /// Friction outside (0, 1]
    #[error("friction must be in (0, 1] (got {0})")]
    FrictionOutOfRange(f64),

    /// Gravity pointing up the screen
    #[error("gravity must be >= 0 (got {0})")]
    NegativeGravity(f64),

    /// NaN or infinity in a numeric field
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
