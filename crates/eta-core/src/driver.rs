//! The polling loop: sample, record, estimate, render, repeat until the
//! target is reached.
//!
//! One iteration completes fully before the next starts. Between iterations
//! the loop sleeps for the configured interval, except in continuous mode
//! where the wait is the command producing its next line.

use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::clock::Clock;
use crate::estimator::{compute_ratio_completed, compute_seconds_left, Direction, RatePolicy};
use crate::measurement::{MeasurementStore, StoreError};
use crate::render::render_line;
use crate::runner::{RunnerError, SampleSource};
use crate::Value;

/// Exit status for failures that are not the command's fault.
pub const EXIT_INTERNAL: i32 = 1;

/// Where the ratio is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartValue {
    /// The first observed value.
    #[default]
    Initial,
    /// A fixed starting value.
    Fixed(Value),
}

impl StartValue {
    /// Resolve against the first observed value.
    pub fn resolve(self, first: Value) -> Value {
        match self {
            StartValue::Initial => first,
            StartValue::Fixed(v) => v,
        }
    }
}

impl FromStr for StartValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("initial") {
            return Ok(StartValue::Initial);
        }
        s.parse::<Value>()
            .map(StartValue::Fixed)
            .map_err(|_| format!("expected 'initial' or a non-negative integer, got '{s}'"))
    }
}

/// Settings for one run. Read-only for the duration of the loop.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub target: Value,
    pub direction: Direction,
    pub start: StartValue,
    /// Sleep between polls in one-shot mode.
    pub interval: Duration,
    pub continuous: bool,
    /// Output width in columns.
    pub width: usize,
    pub rate_policy: RatePolicy,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub samples: usize,
    pub initial_value: Value,
    pub final_value: Value,
    pub elapsed: Duration,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Runner(#[from] RunnerError),
    #[error("internal clock inconsistency")]
    Store(#[from] StoreError),
    #[error("writing progress output failed")]
    Output(#[source] std::io::Error),
}

impl DriverError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Runner(e) => e.exit_code(),
            DriverError::Store(_) | DriverError::Output(_) => EXIT_INTERNAL,
        }
    }
}

/// Poll `source` until the target is reached, writing one redrawn progress
/// line per sample to `out`.
///
/// The source is finished on every exit path so long-lived commands are
/// released.
pub async fn run<S, C, W>(
    settings: &RunSettings,
    source: &mut S,
    clock: &C,
    out: &mut W,
) -> Result<Outcome, DriverError>
where
    S: SampleSource,
    C: Clock,
    W: Write,
{
    let mut store = MeasurementStore::new();
    let result = poll_until_complete(settings, source, clock, out, &mut store).await;

    if !store.is_empty() {
        let newline = writeln!(out).and_then(|_| out.flush());
        if result.is_ok() {
            newline.map_err(DriverError::Output)?;
        }
    }
    if let Err(e) = source.finish().await {
        tracing::warn!(error = %e, "releasing external command failed");
    }

    let initial_value = result?;
    let final_value = store.newest().map(|s| s.value).unwrap_or(initial_value);
    let outcome = Outcome {
        samples: store.len(),
        initial_value,
        final_value,
        elapsed: store.elapsed().unwrap_or_default(),
    };
    tracing::info!(
        samples = outcome.samples,
        initial = outcome.initial_value,
        target = settings.target,
        elapsed_secs = outcome.elapsed.as_secs_f64(),
        "target reached"
    );
    Ok(outcome)
}

/// Returns the resolved initial value once the ratio reaches 1.
async fn poll_until_complete<S, C, W>(
    settings: &RunSettings,
    source: &mut S,
    clock: &C,
    out: &mut W,
    store: &mut MeasurementStore,
) -> Result<Value, DriverError>
where
    S: SampleSource,
    C: Clock,
    W: Write,
{
    let mut initial_value = 0;
    loop {
        let current = source.next_value().await?;
        if store.is_empty() {
            initial_value = settings.start.resolve(current);
            tracing::debug!(initial = initial_value, first = current, "initial value resolved");
        }
        store.append(clock.now(), current)?;

        let ratio =
            compute_ratio_completed(store, initial_value, settings.target, settings.direction);
        let seconds_left = compute_seconds_left(
            store,
            settings.target,
            settings.direction,
            settings.rate_policy,
        );
        tracing::debug!(
            value = current,
            ratio,
            seconds_left = ?seconds_left,
            samples = store.len(),
            "sample recorded"
        );

        let line = render_line(
            settings.width,
            initial_value.max(settings.target),
            current,
            ratio,
            seconds_left,
        );
        write!(out, "\r{line}")
            .and_then(|_| out.flush())
            .map_err(DriverError::Output)?;

        if ratio >= 1.0 {
            return Ok(initial_value);
        }
        if !settings.continuous {
            tokio::time::sleep(settings.interval).await;
        }
    }
}
