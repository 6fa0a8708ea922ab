//! Progress line rendering (bar, percent, value, ETA).

use crate::Value;

/// Shown in place of an ETA when no reliable rate exists.
pub const UNKNOWN_ETA: &str = "--:--:--";

/// Render one progress line that fits in `width` columns when possible.
///
/// Layout: `[####      ]  25% 25/100 ETA 0:00:30`. The bar takes whatever the
/// text leaves; its fill is clamped to [0, 1] while the percentage is not.
pub fn render_line(
    width: usize,
    scale_max: Value,
    current: Value,
    ratio: f64,
    seconds_left: Option<f64>,
) -> String {
    let pct = (ratio * 100.0).floor() as i64;
    let text = format!(
        " {pct:>3}% {current}/{scale_max} ETA {}",
        format_eta(seconds_left)
    );
    let interior = width.saturating_sub(text.chars().count() + 2);
    let filled = ((ratio.clamp(0.0, 1.0) * interior as f64).floor() as usize).min(interior);
    format!(
        "[{}{}]{}",
        "#".repeat(filled),
        " ".repeat(interior - filled),
        text
    )
}

/// Format seconds as `H:MM:SS`; unknown, negative or non-finite input gives
/// [`UNKNOWN_ETA`].
pub fn format_eta(seconds_left: Option<f64>) -> String {
    match seconds_left {
        Some(s) if s.is_finite() && s >= 0.0 => {
            let total = s.round() as u64;
            let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);
            format!("{h}:{m:02}:{s:02}")
        }
        _ => UNKNOWN_ETA.to_string(),
    }
}
