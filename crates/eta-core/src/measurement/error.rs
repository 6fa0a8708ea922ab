//! Store consistency errors.

use std::time::Duration;
use thiserror::Error;

/// Raised when an append would break chronological order.
///
/// This only happens with a broken clock and is not recoverable for the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("sample timestamp is {behind:?} older than the newest stored sample")]
    ClockRegression { behind: Duration },
}
