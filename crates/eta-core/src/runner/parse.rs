//! Extract the first unsigned decimal number from a line of command output.

use super::RunnerError;
use crate::Value;

/// Only this many leading bytes of an output line are inspected.
pub const MAX_LINE_BYTES: usize = 1000;

/// Parse the first run of ASCII digits in `output`.
///
/// Text before the number is skipped; text after it is ignored. A number too
/// large for `Value` saturates at `Value::MAX`.
pub fn parse_value(output: &str) -> Result<Value, RunnerError> {
    let head = truncate(output, MAX_LINE_BYTES);
    let start = head
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| RunnerError::Unparseable {
            output: head.trim_end_matches(['\n', '\r']).to_string(),
        })?;
    let digits = &head[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    Ok(digits[..end].parse::<Value>().unwrap_or(Value::MAX))
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
