//! Forecast accuracy metrics.

/// Mean absolute percentage error, as a percentage.
///
/// Returns `None` for empty input, mismatched lengths, or any zero
/// actual value (the ratio would be undefined); the forecast stage
/// treats that as a fit failure rather than dividing by zero.
pub fn mape(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.is_empty() || actual.len() != predicted.len() {
        return None;
    }
    if actual.iter().any(|a| *a == 0.0) {
        return None;
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| ((a - p) / a).abs())
        .sum();
    Some(sum / actual.len() as f64 * 100.0)
}
