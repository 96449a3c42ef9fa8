pub mod error;
pub mod options;

pub use error::ConfigError;
pub use options::SimulationOptions;
