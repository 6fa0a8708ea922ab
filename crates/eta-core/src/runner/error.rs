//! Runner failures and their process exit statuses.

use thiserror::Error;

/// Exit status when the command could not be run or exited non-zero.
pub const EXIT_COMMAND_FAILED: i32 = 3;
/// Exit status when no number could be found in the command output.
pub const EXIT_UNPARSEABLE_OUTPUT: i32 = 4;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to execute external command '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("reading output of external command failed")]
    Io(#[from] std::io::Error),
    #[error("external command terminated with non-zero exit code ({})", describe_code(.code))]
    NonZeroExit { code: Option<i32> },
    #[error("could not find number in command output -- '{output}'")]
    Unparseable { output: String },
}

fn describe_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "killed by signal".to_string())
}

impl RunnerError {
    /// Process exit status for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Spawn { .. } | RunnerError::Io(_) | RunnerError::NonZeroExit { .. } => {
                EXIT_COMMAND_FAILED
            }
            RunnerError::Unparseable { .. } => EXIT_UNPARSEABLE_OUTPUT,
        }
    }
}
