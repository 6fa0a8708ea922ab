//! Command runner: obtains one numeric value per poll from a shell command.
//!
//! In one-shot mode the command is spawned, its first output line parsed and
//! the process reaped on every poll. In continuous mode the command is spawned
//! once and each poll reads its next output line; the child is killed when the
//! runner is finished or dropped.

mod command;
mod error;
mod parse;

pub use command::{joined_command, CommandRunner};
pub use error::{RunnerError, EXIT_COMMAND_FAILED, EXIT_UNPARSEABLE_OUTPUT};
pub use parse::{parse_value, MAX_LINE_BYTES};

use crate::Value;

/// Anything the driver can poll for values.
#[allow(async_fn_in_trait)]
pub trait SampleSource {
    /// Produce the next raw value.
    async fn next_value(&mut self) -> Result<Value, RunnerError>;

    /// Release any resources held across polls. Called once after the last
    /// successful poll.
    async fn finish(&mut self) -> Result<(), RunnerError> {
        Ok(())
    }
}
