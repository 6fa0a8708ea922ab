//! CLI for eta: argument parsing, config merge and exit-code mapping.

mod run;

use anyhow::{Context, Result};
use clap::Parser;
use eta_core::config::{self, EtaConfig};
use eta_core::driver::{DriverError, RunSettings, StartValue, EXIT_INTERNAL};
use eta_core::estimator::{Direction, RatePolicy};
use eta_core::runner::joined_command;
use eta_core::Value;
use std::time::Duration;

pub use run::{run_poll, EXIT_INTERRUPTED};

/// Poll a command for a progress value and estimate the time to completion.
#[derive(Debug, Parser)]
#[command(name = "eta")]
#[command(
    about = "Poll a command for a numeric progress value and show an ETA until it reaches a target",
    long_about = None
)]
pub struct Cli {
    /// Value that signifies completion.
    pub target: Value,

    /// Shell command printing the current value. Remaining arguments are joined with spaces.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Seconds to wait between runs of the command (default from config, 1).
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<f64>,

    /// The value decreases toward the target.
    #[arg(short, long)]
    pub down: bool,

    /// Starting value for the ratio: a number, or "initial" for the first observed value.
    #[arg(short, long, default_value = "initial", value_name = "VALUE|initial")]
    pub start: StartValue,

    /// Continuous mode: start the command once and read one value per output line.
    #[arg(short, long)]
    pub cont: bool,

    /// Output width in columns (default from config, 80).
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Estimate the rate with a least-squares fit over all samples.
    #[arg(long)]
    pub least_squares: bool,
}

impl Cli {
    /// Merge flags over the loaded config. Flags win.
    pub fn settings(&self, cfg: &EtaConfig) -> Result<RunSettings> {
        let interval = match self.interval {
            Some(secs) => Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid --interval: {secs}"))?,
            None => cfg.interval()?,
        };
        let rate_policy = if self.least_squares {
            RatePolicy::LeastSquares
        } else {
            cfg.rate_policy
        };
        Ok(RunSettings {
            target: self.target,
            direction: Direction::from_down_flag(self.down),
            start: self.start,
            interval,
            continuous: self.cont,
            width: self.width.unwrap_or(cfg.output_width),
            rate_policy,
        })
    }

    pub fn joined_command(&self) -> String {
        joined_command(&self.command)
    }
}

pub async fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let settings = cli.settings(&cfg)?;
    run_poll(&cli.joined_command(), &settings).await
}

/// Process exit status for an error returned by `run_from_args`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<DriverError>() {
        return e.exit_code();
    }
    if err.is::<run::Interrupted>() {
        return EXIT_INTERRUPTED;
    }
    EXIT_INTERNAL
}

#[cfg(test)]
mod tests;
