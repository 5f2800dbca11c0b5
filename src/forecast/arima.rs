//! First-order autoregressive model on first differences — ARIMA(1,1,0)
//! with intercept.
//!
//! The conditional-least-squares objective for AR(1) has a closed-form
//! minimizer, so the fit is a single OLS regression of each difference on
//! its predecessor. No iterative optimizer, fully deterministic.

use thiserror::Error;

/// Fit failures. All of these degrade to the flat-projection fallback at
/// the forecast stage; none propagate to the render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("insufficient data: need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// The lagged differences carry no variance (e.g. a constant or
    /// perfectly linear series), so the slope is undefined.
    #[error("degenerate series: differenced values have no variance")]
    Degenerate,

    #[error("non-finite parameter estimate")]
    NonFinite,
}

/// Minimum training length: differencing consumes one point and the
/// lag regression needs at least three (x, y) pairs.
pub const MIN_TRAIN_LEN: usize = 5;

/// Stationarity bound on the AR coefficient.
const AR_BOUND: f64 = 0.99;

/// A fitted ARIMA(1,1,0) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arima110 {
    /// AR coefficient on the differenced scale.
    phi: f64,
    /// Regression intercept on the differenced scale.
    intercept: f64,
    /// Last observed difference of the training series.
    last_diff: f64,
    /// Last observed level of the training series.
    last_level: f64,
}

impl Arima110 {
    /// Fits the model to a training series in time order.
    pub fn fit(train: &[f64]) -> Result<Arima110, FitError> {
        if train.len() < MIN_TRAIN_LEN {
            return Err(FitError::InsufficientData {
                needed: MIN_TRAIN_LEN,
                got: train.len(),
            });
        }

        let diffs = difference(train);
        let x = &diffs[..diffs.len() - 1];
        let y = &diffs[1..];

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let mut num = 0.0;
        let mut denom = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            num += (xi - x_mean) * (yi - y_mean);
            denom += (xi - x_mean) * (xi - x_mean);
        }
        if denom.abs() < 1e-12 {
            return Err(FitError::Degenerate);
        }

        let phi = (num / denom).clamp(-AR_BOUND, AR_BOUND);
        let intercept = y_mean - phi * x_mean;
        if !phi.is_finite() || !intercept.is_finite() {
            return Err(FitError::NonFinite);
        }

        let last_diff = *diffs.last().unwrap_or(&0.0);
        let last_level = *train.last().unwrap_or(&0.0);
        Ok(Arima110 {
            phi,
            intercept,
            last_diff,
            last_level,
        })
    }

    /// AR coefficient on the differenced scale.
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Dynamic multi-step forecast: iterates the AR recursion on the
    /// differenced scale and integrates back to levels from the last
    /// training value.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(horizon);
        let mut diff = self.last_diff;
        let mut level = self.last_level;
        for _ in 0..horizon {
            diff = self.intercept + self.phi * diff;
            level += diff;
            out.push(level);
        }
        out
    }
}

/// First differences of a series.
pub fn difference(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|w| w[1] - w[0]).collect()
}
