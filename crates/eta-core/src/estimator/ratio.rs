use super::Direction;
use crate::measurement::MeasurementStore;
use crate::Value;

/// Fraction of the distance from `initial` to `target` covered by the newest
/// sample.
///
/// Not clamped: regression gives a negative ratio and overshoot a ratio above
/// 1. Returns exactly 1.0 when `target == initial`. An empty store reads as
/// "still at `initial`".
pub fn compute_ratio_completed(
    store: &MeasurementStore,
    initial: Value,
    target: Value,
    direction: Direction,
) -> f64 {
    if target == initial {
        return 1.0;
    }
    let current = store.newest().map(|s| s.value).unwrap_or(initial) as f64;
    let (initial, target) = (initial as f64, target as f64);
    match direction {
        Direction::Up => (current - initial) / (target - initial),
        Direction::Down => (initial - current) / (initial - target),
    }
}
