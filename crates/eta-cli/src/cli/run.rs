//! `eta <TARGET> <COMMAND>...` – poll the command until the target is reached.

use anyhow::Result;
use eta_core::clock::MonotonicClock;
use eta_core::driver::{self, RunSettings};
use eta_core::runner::CommandRunner;
use std::fmt;

/// Exit status after Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Returned when the run is stopped with Ctrl-C.
#[derive(Debug)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interrupted")
    }
}

impl std::error::Error for Interrupted {}

pub async fn run_poll(command: &str, settings: &RunSettings) -> Result<()> {
    tracing::info!(
        command,
        target = settings.target,
        direction = ?settings.direction,
        continuous = settings.continuous,
        "starting poll loop"
    );
    let mut runner = CommandRunner::new(command, settings.continuous);
    let mut stdout = std::io::stdout();
    let clock = MonotonicClock;

    // Dropping the driver future on Ctrl-C drops the runner, which kills a
    // continuous-mode child.
    tokio::select! {
        outcome = driver::run(settings, &mut runner, &clock, &mut stdout) => {
            let outcome = outcome?;
            tracing::debug!(?outcome, "poll loop finished");
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            tracing::info!("interrupted by user");
            Err(Interrupted.into())
        }
    }
}
