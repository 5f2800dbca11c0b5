//! Executive summary metrics for the dashboard header.

use serde::Serialize;

use crate::analysis::crossover::{Crossover, detect_crossover};
use crate::bloc::Bloc;
use crate::data::CleanedDataset;
use crate::series::{Aggregate, Measure, yearly_series};

/// Headline metrics shown above the charts, all for the latest year.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveSummary {
    pub latest_year: i32,
    /// G7 mean fossil energy share (%).
    pub g7_fossil_share_pct: Option<f64>,
    /// BRICS total fossil fuel consumption (TWh).
    pub brics_fossil_consumption_twh: Option<f64>,
    /// BRICS mean low-carbon energy share (%).
    pub brics_low_carbon_share_pct: Option<f64>,
    pub crossover: Crossover,
}

/// Computes the headline metrics from the cleaned dataset.
pub fn executive_summary(dataset: &CleanedDataset) -> ExecutiveSummary {
    let year = dataset.latest_year;

    let fossil_share = yearly_series(dataset, Measure::FossilShareEnergy, Aggregate::Mean);
    let consumption = yearly_series(dataset, Measure::FossilFuelConsumption, Aggregate::Sum);
    let low_carbon = yearly_series(dataset, Measure::LowCarbonShareEnergy, Aggregate::Mean);

    let value_for = |series: &[crate::series::YearlySeries], bloc: Bloc| {
        series
            .iter()
            .find(|s| s.bloc == bloc)
            .and_then(|s| s.value_at(year))
    };

    ExecutiveSummary {
        latest_year: year,
        g7_fossil_share_pct: value_for(&fossil_share, Bloc::G7),
        brics_fossil_consumption_twh: value_for(&consumption, Bloc::Brics),
        brics_low_carbon_share_pct: value_for(&low_carbon, Bloc::Brics),
        crossover: detect_crossover(dataset),
    }
}
