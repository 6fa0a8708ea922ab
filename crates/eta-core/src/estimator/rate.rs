use super::RatePolicy;
use crate::measurement::{MeasurementStore, Sample};

/// Signed rate of change in value units per second.
///
/// `None` with fewer than two samples or when no time has passed between them.
pub fn compute_rate(store: &MeasurementStore, policy: RatePolicy) -> Option<f64> {
    if store.len() < 2 {
        return None;
    }
    let rate = match policy {
        RatePolicy::TwoPoint => two_point(store.oldest()?, store.newest()?),
        RatePolicy::LeastSquares => least_squares(store),
    };
    rate.filter(|r| r.is_finite())
}

fn two_point(oldest: &Sample, newest: &Sample) -> Option<f64> {
    let dt = newest.secs_since(oldest);
    if dt <= 0.0 {
        return None;
    }
    Some((newest.value as f64 - oldest.value as f64) / dt)
}

fn least_squares(store: &MeasurementStore) -> Option<f64> {
    let origin = store.oldest()?;
    let n = store.len() as f64;
    let points = store
        .all()
        .map(|s| (s.secs_since(origin), s.value as f64));

    let (sum_x, sum_y) = points
        .clone()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (mean_x, mean_y) = (sum_x / n, sum_y / n);

    let (cov, var) = points.fold((0.0, 0.0), |(cov, var), (x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });
    if var <= 0.0 {
        return None;
    }
    Some(cov / var)
}
