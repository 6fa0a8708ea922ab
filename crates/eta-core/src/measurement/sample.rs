use std::time::Instant;

use crate::Value;

/// One timestamped observation of the tracked quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub timestamp: Instant,
    pub value: Value,
}

impl Sample {
    pub fn new(timestamp: Instant, value: Value) -> Self {
        Self { timestamp, value }
    }

    /// Seconds from `earlier` to this sample (0 if `earlier` is later).
    pub fn secs_since(&self, earlier: &Sample) -> f64 {
        self.timestamp
            .saturating_duration_since(earlier.timestamp)
            .as_secs_f64()
    }
}
