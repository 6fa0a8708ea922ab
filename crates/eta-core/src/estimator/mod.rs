//! Rate and ETA estimation over a measurement store.
//!
//! Everything here is a pure function of the store contents plus the run
//! settings. Ill-defined inputs never produce errors:
//! - a zero distance between start and target counts as complete (ratio 1.0);
//! - too few samples, zero elapsed time, or no progress give an unknown ETA (`None`).

mod eta;
mod rate;
mod ratio;

pub use eta::compute_seconds_left;
pub use rate::compute_rate;
pub use ratio::compute_ratio_completed;

use serde::{Deserialize, Serialize};

/// Whether completion means the value rises or falls toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn from_down_flag(down: bool) -> Self {
        if down {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// How the rate of change is derived from the sample history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePolicy {
    /// Slope between the oldest and newest sample.
    #[default]
    TwoPoint,
    /// Least-squares slope over every sample. Same result as `TwoPoint` when
    /// only two samples exist.
    LeastSquares,
}

#[cfg(test)]
mod tests;
