use std::time::{Duration, Instant};

use super::{Sample, StoreError};
use crate::Value;

/// Append-only, time-ordered history of samples.
#[derive(Debug, Default, Clone)]
pub struct MeasurementStore {
    samples: Vec<Sample>,
}

impl MeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample. Equal timestamps are accepted; an older one is not.
    pub fn append(&mut self, timestamp: Instant, value: Value) -> Result<(), StoreError> {
        if let Some(last) = self.samples.last() {
            if timestamp < last.timestamp {
                return Err(StoreError::ClockRegression {
                    behind: last.timestamp - timestamp,
                });
            }
        }
        self.samples.push(Sample::new(timestamp, value));
        Ok(())
    }

    /// First sample ever appended, `None` before the first poll.
    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Most recently appended sample.
    pub fn newest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// All samples in insertion order. The iterator is cheap to clone, so
    /// estimators can make several passes.
    pub fn all(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time spanned by the history (newest minus oldest timestamp).
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.oldest(), self.newest()) {
            (Some(first), Some(last)) => Some(last.timestamp - first.timestamp),
            _ => None,
        }
    }
}
