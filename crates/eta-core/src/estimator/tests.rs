//! Estimator tests: ratio, rate and seconds-left sentinels plus end-to-end
//! scenarios.

use std::time::{Duration, Instant};

use super::*;
use crate::measurement::MeasurementStore;

const EPS: f64 = 1e-9;

fn store_of(points: &[(f64, u64)]) -> MeasurementStore {
    let t0 = Instant::now();
    let mut store = MeasurementStore::new();
    for &(secs, value) in points {
        store
            .append(t0 + Duration::from_secs_f64(secs), value)
            .unwrap();
    }
    store
}

#[test]
fn ratio_is_one_when_target_equals_initial() {
    for current in [0, 7, 42, 1000] {
        let store = store_of(&[(0.0, current)]);
        assert_eq!(compute_ratio_completed(&store, 42, 42, Direction::Up), 1.0);
        assert_eq!(compute_ratio_completed(&store, 42, 42, Direction::Down), 1.0);
    }
}

#[test]
fn ratio_is_not_clamped() {
    let store = store_of(&[(0.0, 50), (1.0, 20)]);
    let r = compute_ratio_completed(&store, 50, 100, Direction::Up);
    assert!((r - (-0.6)).abs() < EPS);

    let store = store_of(&[(0.0, 50), (1.0, 150)]);
    let r = compute_ratio_completed(&store, 50, 100, Direction::Up);
    assert!((r - 2.0).abs() < EPS);
}

#[test]
fn ratio_on_empty_store_reads_as_initial() {
    let store = MeasurementStore::new();
    assert_eq!(compute_ratio_completed(&store, 10, 20, Direction::Up), 0.0);
}

#[test]
fn seconds_left_unknown_with_single_sample() {
    let store = store_of(&[(0.0, 10)]);
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint),
        None
    );
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::LeastSquares),
        None
    );
}

#[test]
fn seconds_left_unknown_when_stalled() {
    let store = store_of(&[(0.0, 30), (4.0, 30)]);
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint),
        None
    );
}

#[test]
fn seconds_left_unknown_when_moving_away_from_target() {
    let store = store_of(&[(0.0, 30), (4.0, 20)]);
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint),
        None
    );
    let store = store_of(&[(0.0, 30), (4.0, 40)]);
    assert_eq!(
        compute_seconds_left(&store, 0, Direction::Down, RatePolicy::TwoPoint),
        None
    );
}

#[test]
fn seconds_left_unknown_without_elapsed_time() {
    let store = store_of(&[(2.0, 10), (2.0, 20)]);
    assert_eq!(compute_rate(&store, RatePolicy::TwoPoint), None);
    assert_eq!(compute_rate(&store, RatePolicy::LeastSquares), None);
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint),
        None
    );
}

#[test]
fn seconds_left_zero_once_target_passed() {
    let store = store_of(&[(0.0, 90), (1.0, 110)]);
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint),
        Some(0.0)
    );
}

#[test]
fn two_point_rate_is_exact() {
    let (t0, v0, t1, v1, target) = (1.5, 12u64, 9.25, 71u64, 500u64);
    let store = store_of(&[(t0, v0), (t1, v1)]);
    let rate = (v1 as f64 - v0 as f64) / (t1 - t0);
    let expected = (target as f64 - v1 as f64) / rate;
    let got = compute_seconds_left(&store, target, Direction::Up, RatePolicy::TwoPoint).unwrap();
    assert!((got - expected).abs() < 1e-6, "got {got}, expected {expected}");

    let store = store_of(&[(t0, 900), (t1, 640)]);
    let rate = (900.0 - 640.0) / (t1 - t0);
    let expected = (640.0 - 100.0) / rate;
    let got = compute_seconds_left(&store, 100, Direction::Down, RatePolicy::TwoPoint).unwrap();
    assert!((got - expected).abs() < 1e-6, "got {got}, expected {expected}");
}

#[test]
fn two_point_uses_only_endpoints() {
    let store = store_of(&[(0.0, 0), (1.0, 90), (2.0, 5), (10.0, 20)]);
    let rate = compute_rate(&store, RatePolicy::TwoPoint).unwrap();
    assert!((rate - 2.0).abs() < EPS);
}

#[test]
fn least_squares_matches_two_point_for_two_samples() {
    let store = store_of(&[(0.5, 3), (7.0, 81)]);
    let a = compute_rate(&store, RatePolicy::TwoPoint).unwrap();
    let b = compute_rate(&store, RatePolicy::LeastSquares).unwrap();
    assert!((a - b).abs() < 1e-9, "two-point {a}, least-squares {b}");
}

#[test]
fn least_squares_smooths_noisy_samples() {
    // Linear trend of 2 units/s with a single outlier at the end.
    let store = store_of(&[(0.0, 0), (1.0, 2), (2.0, 4), (3.0, 6), (4.0, 4)]);
    let two_point = compute_rate(&store, RatePolicy::TwoPoint).unwrap();
    let fitted = compute_rate(&store, RatePolicy::LeastSquares).unwrap();
    assert!((two_point - 1.0).abs() < EPS);
    assert!((fitted - 1.2).abs() < EPS);
}

#[test]
fn scenario_increasing() {
    let store = store_of(&[(0.0, 0), (10.0, 25)]);
    let ratio = compute_ratio_completed(&store, 0, 100, Direction::Up);
    assert!((ratio - 0.25).abs() < EPS);
    let rate = compute_rate(&store, RatePolicy::TwoPoint).unwrap();
    assert!((rate - 2.5).abs() < EPS);
    let left = compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint).unwrap();
    assert!((left - 30.0).abs() < EPS);
}

#[test]
fn scenario_decreasing() {
    let store = store_of(&[(0.0, 100), (5.0, 80)]);
    let ratio = compute_ratio_completed(&store, 100, 0, Direction::Down);
    assert!((ratio - 0.20).abs() < EPS);
    let rate = compute_rate(&store, RatePolicy::TwoPoint).unwrap();
    assert!((rate + 4.0).abs() < EPS);
    let left = compute_seconds_left(&store, 0, Direction::Down, RatePolicy::TwoPoint).unwrap();
    assert!((left - 20.0).abs() < EPS);
}

#[test]
fn scenario_stalled() {
    let store = store_of(&[(0.0, 50), (3.0, 50)]);
    let ratio = compute_ratio_completed(&store, 0, 100, Direction::Up);
    assert!((ratio - 0.5).abs() < EPS);
    assert_eq!(
        compute_seconds_left(&store, 100, Direction::Up, RatePolicy::TwoPoint),
        None
    );
}

#[test]
fn direction_from_down_flag() {
    assert_eq!(Direction::from_down_flag(true), Direction::Down);
    assert_eq!(Direction::from_down_flag(false), Direction::Up);
}
