//! Measurement history for a single polling run.
//!
//! The store is append-only and chronological: every poll produces exactly one
//! retained sample, including repeated or regressing values. Growth is
//! unbounded for the lifetime of the run; a run is expected to last seconds to
//! hours, so no windowing or eviction is done here.

mod error;
mod sample;
mod store;

pub use error::StoreError;
pub use sample::Sample;
pub use store::MeasurementStore;

#[cfg(test)]
mod tests;
