use super::{compute_rate, Direction, RatePolicy};
use crate::measurement::MeasurementStore;
use crate::Value;

/// Projected seconds until the newest value reaches `target`.
///
/// `None` means unknown: fewer than two samples, or no movement toward the
/// target. A target that has already been reached gives `Some(0.0)`.
pub fn compute_seconds_left(
    store: &MeasurementStore,
    target: Value,
    direction: Direction,
    policy: RatePolicy,
) -> Option<f64> {
    let slope = compute_rate(store, policy)?;
    let current = store.newest()?.value as f64;
    let target = target as f64;
    let (rate, remaining) = match direction {
        Direction::Up => (slope, target - current),
        Direction::Down => (-slope, current - target),
    };
    if rate <= 0.0 {
        return None;
    }
    if remaining <= 0.0 {
        return Some(0.0);
    }
    Some(remaining / rate).filter(|s| s.is_finite())
}
