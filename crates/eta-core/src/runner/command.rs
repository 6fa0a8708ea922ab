//! Shell command execution for one-shot and continuous polling.

use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};

use super::{parse_value, RunnerError, SampleSource, MAX_LINE_BYTES};
use crate::Value;

/// Join command-line parts into a single shell command string.
pub fn joined_command<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Long-lived child used in continuous mode.
struct RunningCommand {
    child: Child,
    stdout: BufReader<ChildStdout>,
}

/// Runs a shell command and parses one value from each output line.
pub struct CommandRunner {
    command: String,
    continuous: bool,
    running: Option<RunningCommand>,
}

impl CommandRunner {
    pub fn new(command: impl Into<String>, continuous: bool) -> Self {
        Self {
            command: command.into(),
            continuous,
            running: None,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn spawn(&self) -> Result<RunningCommand, RunnerError> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                command: self.command.clone(),
                source,
            })?;
        let stdout = child.stdout.take().ok_or_else(|| RunnerError::Spawn {
            command: self.command.clone(),
            source: std::io::Error::other("child stdout not captured"),
        })?;
        tracing::debug!(command = %self.command, pid = ?child.id(), "spawned external command");
        Ok(RunningCommand {
            child,
            stdout: BufReader::new(stdout),
        })
    }

    async fn poll_once(&mut self) -> Result<Value, RunnerError> {
        let mut running = self.spawn()?;
        let line = read_line(&mut running.stdout, false).await?;
        let value = parse_value(&line)?;

        // Close our end before reaping; a command still writing gets SIGPIPE.
        let RunningCommand { mut child, stdout } = running;
        drop(stdout);
        let status = child.wait().await?;
        if !exited_cleanly(status) {
            return Err(RunnerError::NonZeroExit {
                code: status.code(),
            });
        }
        Ok(value)
    }

    async fn poll_continuous(&mut self) -> Result<Value, RunnerError> {
        let running = match self.running.take() {
            Some(running) => running,
            None => self.spawn()?,
        };
        let running = self.running.insert(running);
        let line = read_line(&mut running.stdout, true).await?;
        parse_value(&line)
    }
}

/// Read one line, keeping at most `MAX_LINE_BYTES` of it. An exhausted
/// stream yields an empty string.
///
/// With `skip_overflow` the rest of an over-long line is consumed and dropped
/// so the next read starts on the following line; otherwise reading stops at
/// the cap.
async fn read_line(
    stdout: &mut BufReader<ChildStdout>,
    skip_overflow: bool,
) -> Result<String, RunnerError> {
    let mut buf = Vec::with_capacity(128);
    loop {
        let available = stdout.fill_buf().await?;
        if available.is_empty() {
            break;
        }
        let (chunk, at_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(i) => (&available[..=i], true),
            None => (available, false),
        };
        let room = MAX_LINE_BYTES - buf.len();
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
        let used = chunk.len();
        stdout.consume(used);
        if at_newline || (!skip_overflow && buf.len() >= MAX_LINE_BYTES) {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Success, or death by SIGPIPE after we closed the pipe. The shell reports
/// the latter either as the signal itself or as exit code 128 + SIGPIPE.
fn exited_cleanly(status: ExitStatus) -> bool {
    if status.success() {
        return true;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(libc::SIGPIPE) || status.code() == Some(128 + libc::SIGPIPE) {
            return true;
        }
    }
    false
}

impl SampleSource for CommandRunner {
    async fn next_value(&mut self) -> Result<Value, RunnerError> {
        if self.continuous {
            self.poll_continuous().await
        } else {
            self.poll_once().await
        }
    }

    async fn finish(&mut self) -> Result<(), RunnerError> {
        if let Some(mut running) = self.running.take() {
            if let Err(e) = running.child.kill().await {
                tracing::debug!(error = %e, "continuous command already gone");
            }
            tracing::debug!(command = %self.command, "continuous command released");
        }
        Ok(())
    }
}
