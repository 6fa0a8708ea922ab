pub mod config;
pub mod logging;

pub mod clock;
pub mod driver;
pub mod estimator;
pub mod measurement;
pub mod render;
pub mod runner;

/// Quantity reported by the polled command.
pub type Value = u64;
