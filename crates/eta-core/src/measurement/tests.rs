//! Tests for the measurement store.

use std::time::{Duration, Instant};

use super::{MeasurementStore, StoreError};

#[test]
fn empty_store_has_no_endpoints() {
    let store = MeasurementStore::new();
    assert!(store.is_empty());
    assert!(store.oldest().is_none());
    assert!(store.newest().is_none());
    assert!(store.elapsed().is_none());
    assert_eq!(store.all().count(), 0);
}

#[test]
fn oldest_and_newest_track_first_and_last_append() {
    let t0 = Instant::now();
    let mut store = MeasurementStore::new();
    for i in 0..50u64 {
        store.append(t0 + Duration::from_secs(i), i * 3).unwrap();
        assert_eq!(store.oldest().unwrap().value, 0);
        assert_eq!(store.oldest().unwrap().timestamp, t0);
        assert_eq!(store.newest().unwrap().value, i * 3);
        assert_eq!(store.len(), i as usize + 1);
    }
    assert_eq!(store.elapsed(), Some(Duration::from_secs(49)));
}

#[test]
fn repeated_and_regressing_values_are_kept() {
    let t0 = Instant::now();
    let mut store = MeasurementStore::new();
    store.append(t0, 10).unwrap();
    store.append(t0 + Duration::from_secs(1), 10).unwrap();
    store.append(t0 + Duration::from_secs(2), 4).unwrap();
    let values: Vec<u64> = store.all().map(|s| s.value).collect();
    assert_eq!(values, vec![10, 10, 4]);
}

#[test]
fn equal_timestamps_are_accepted() {
    let t0 = Instant::now();
    let mut store = MeasurementStore::new();
    store.append(t0, 1).unwrap();
    store.append(t0, 2).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn clock_regression_is_rejected() {
    let t0 = Instant::now();
    let mut store = MeasurementStore::new();
    store.append(t0 + Duration::from_secs(5), 1).unwrap();
    let err = store.append(t0 + Duration::from_secs(2), 2).unwrap_err();
    assert_eq!(
        err,
        StoreError::ClockRegression {
            behind: Duration::from_secs(3)
        }
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn all_is_restartable() {
    let t0 = Instant::now();
    let mut store = MeasurementStore::new();
    store.append(t0, 1).unwrap();
    store.append(t0 + Duration::from_secs(1), 2).unwrap();
    let iter = store.all();
    let first: u64 = iter.clone().map(|s| s.value).sum();
    let second: u64 = iter.map(|s| s.value).sum();
    assert_eq!(first, 3);
    assert_eq!(second, 3);
}
