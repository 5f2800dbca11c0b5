//! Per-bloc fossil-share forecasting: train/validation split, an
//! ARIMA(1,1,0) fit, MAPE scoring, and an 8-year projection.
//!
//! The stage is a pure function of the yearly series and is cheap enough
//! to recompute on every render; nothing here is cached. Fit failure is
//! never an error for the caller — it degrades to a flat projection
//! carried in [`Accuracy::Unavailable`].

mod arima;
mod metrics;

pub use arima::{Arima110, FitError, MIN_TRAIN_LEN, difference};
pub use metrics::mape;

use serde::Serialize;
use tracing::warn;

use crate::bloc::Bloc;
use crate::data::CleanedDataset;
use crate::series::{Aggregate, Measure, YearlySeries, yearly_series};

/// Trailing years held out for validation scoring.
pub const VALIDATION_WINDOW: usize = 3;

/// Years projected beyond the last training point.
pub const PROJECTION_HORIZON: usize = 8;

/// Provenance of one forecast-chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Training portion of the observed series.
    Historical,
    /// Held-out observed points used for scoring.
    Validation,
    /// Model output beyond the last training year.
    Projection,
}

/// One point of the combined forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub value: f64,
    pub kind: PointKind,
}

/// Validation accuracy, or the reason it could not be computed.
///
/// Modeled as an enum so callers must acknowledge the degraded case
/// instead of reading a sentinel number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Accuracy {
    /// Mean absolute percentage error over the validation window, in percent.
    Mape { pct: f64 },
    /// The fit failed; the projection is the flat fallback.
    Unavailable { reason: String },
}

impl Accuracy {
    pub fn is_available(&self) -> bool {
        matches!(self, Accuracy::Mape { .. })
    }
}

/// Forecast output for one bloc: the observed series tagged by role,
/// the projection, and the accuracy score.
#[derive(Debug, Clone, Serialize)]
pub struct BlocForecast {
    pub bloc: Bloc,
    /// Training points, then validation points, then projection points.
    /// The projection starts the year after the last training point, so
    /// its first years coincide with the validation years.
    pub points: Vec<ForecastPoint>,
    pub accuracy: Accuracy,
}

impl BlocForecast {
    /// Projection values only, in year order.
    pub fn projection(&self) -> Vec<&ForecastPoint> {
        self.points
            .iter()
            .filter(|p| p.kind == PointKind::Projection)
            .collect()
    }
}

/// Runs the forecast stage on the bloc-mean fossil share series.
pub fn forecast_fossil_share(dataset: &CleanedDataset) -> Vec<BlocForecast> {
    yearly_series(dataset, Measure::FossilShareEnergy, Aggregate::Mean)
        .iter()
        .map(forecast_series)
        .collect()
}

/// Forecasts a single bloc's yearly series.
pub fn forecast_series(series: &YearlySeries) -> BlocForecast {
    let n = series.points.len();
    let split = n.saturating_sub(VALIDATION_WINDOW);
    let (train, test) = series.points.split_at(split);

    let mut points: Vec<ForecastPoint> = train
        .iter()
        .map(|p| ForecastPoint {
            year: p.year,
            value: p.value,
            kind: PointKind::Historical,
        })
        .chain(test.iter().map(|p| ForecastPoint {
            year: p.year,
            value: p.value,
            kind: PointKind::Validation,
        }))
        .collect();

    let Some(last_train) = train.last() else {
        return BlocForecast {
            bloc: series.bloc,
            points,
            accuracy: Accuracy::Unavailable {
                reason: "no training points".to_string(),
            },
        };
    };

    let train_values: Vec<f64> = train.iter().map(|p| p.value).collect();
    let test_values: Vec<f64> = test.iter().map(|p| p.value).collect();

    let fitted = Arima110::fit(&train_values)
        .map_err(|e| e.to_string())
        .and_then(|model| {
            let test_preds = model.forecast(test_values.len());
            match mape(&test_values, &test_preds) {
                Some(pct) => Ok((model.forecast(PROJECTION_HORIZON), pct)),
                None => Err("validation window contains a zero actual".to_string()),
            }
        });

    let (projection, accuracy) = match fitted {
        Ok((projection, pct)) => (projection, Accuracy::Mape { pct }),
        Err(reason) => {
            warn!(bloc = %series.bloc, %reason, "forecast fit failed, using flat projection");
            (
                vec![last_train.value; PROJECTION_HORIZON],
                Accuracy::Unavailable { reason },
            )
        }
    };

    points.extend(projection.into_iter().enumerate().map(|(i, value)| {
        ForecastPoint {
            year: last_train.year + 1 + i as i32,
            value,
            kind: PointKind::Projection,
        }
    }));

    BlocForecast {
        bloc: series.bloc,
        points,
        accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesPoint;

    fn series_from(values: &[f64]) -> YearlySeries {
        YearlySeries {
            bloc: Bloc::G7,
            measure: Measure::FossilShareEnergy,
            aggregate: Aggregate::Mean,
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| SeriesPoint {
                    year: 2000 + i as i32,
                    value: *v,
                })
                .collect(),
        }
    }

    fn decaying_decline(n: usize) -> Vec<f64> {
        let mut values = vec![85.0];
        let mut diff = -1.5;
        for _ in 1..n {
            values.push(values.last().copied().unwrap_or(0.0) + diff);
            diff *= 0.7;
        }
        values
    }

    #[test]
    fn successful_fit_scores_and_projects() {
        let series = series_from(&decaying_decline(15));
        let result = forecast_series(&series);

        assert!(result.accuracy.is_available());
        let projection = result.projection();
        assert_eq!(projection.len(), PROJECTION_HORIZON);
        // Projection starts the year after the last training point.
        assert_eq!(projection[0].year, 2000 + 12);

        let historical = result
            .points
            .iter()
            .filter(|p| p.kind == PointKind::Historical)
            .count();
        let validation = result
            .points
            .iter()
            .filter(|p| p.kind == PointKind::Validation)
            .count();
        assert_eq!(historical, 12);
        assert_eq!(validation, VALIDATION_WINDOW);
    }

    #[test]
    fn forecast_is_deterministic() {
        let series = series_from(&decaying_decline(12));
        let a = forecast_series(&series);
        let b = forecast_series(&series);
        assert_eq!(a.points, b.points);
        assert_eq!(a.accuracy, b.accuracy);
    }

    #[test]
    fn degenerate_series_falls_back_to_flat_projection() {
        // Constant training series forces a fit failure.
        let series = series_from(&[80.0; 12]);
        let result = forecast_series(&series);

        assert!(!result.accuracy.is_available());
        let projection = result.projection();
        assert_eq!(projection.len(), PROJECTION_HORIZON);
        // Flat at the last training value.
        assert!(projection.iter().all(|p| p.value == 80.0));
    }

    #[test]
    fn short_series_falls_back_without_panicking() {
        let series = series_from(&[80.0, 79.0, 78.0, 77.0]);
        let result = forecast_series(&series);
        assert!(matches!(result.accuracy, Accuracy::Unavailable { .. }));
        assert_eq!(result.projection().len(), PROJECTION_HORIZON);
    }

    #[test]
    fn empty_series_yields_no_points() {
        let series = series_from(&[]);
        let result = forecast_series(&series);
        assert!(result.points.is_empty());
        assert!(matches!(result.accuracy, Accuracy::Unavailable { .. }));
    }

    #[test]
    fn zero_validation_actual_falls_back() {
        let mut values = decaying_decline(12);
        let n = values.len();
        values[n - 1] = 0.0;
        let series = series_from(&values);
        let result = forecast_series(&series);
        assert!(matches!(result.accuracy, Accuracy::Unavailable { .. }));
    }
}
