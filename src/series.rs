//! Per-bloc yearly aggregation of cleaned observations.
//!
//! Every chart's underlying series comes through [`yearly_series`]; the
//! only variation between charts is the measure and the operator.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::bloc::Bloc;
use crate::data::{CleanedDataset, CleanedRow};

/// A numeric analysis measure on a cleaned row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Gdp,
    Population,
    FossilShareEnergy,
    LowCarbonShareEnergy,
    SolarConsumption,
    WindConsumption,
    EnergyPerGdp,
    FossilFuelConsumption,
    RenewablesConsumption,
}

impl Measure {
    /// Value of this measure on a row. Required measures are always
    /// `Some`; the rest may be missing and are skipped by aggregation.
    pub fn of(self, row: &CleanedRow) -> Option<f64> {
        match self {
            Measure::Gdp => Some(row.gdp),
            Measure::Population => row.population,
            Measure::FossilShareEnergy => Some(row.fossil_share_energy),
            Measure::LowCarbonShareEnergy => Some(row.low_carbon_share_energy),
            Measure::SolarConsumption => row.solar_consumption,
            Measure::WindConsumption => row.wind_consumption,
            Measure::EnergyPerGdp => Some(row.energy_per_gdp),
            Measure::FossilFuelConsumption => Some(row.fossil_fuel_consumption),
            Measure::RenewablesConsumption => row.renewables_consumption,
        }
    }

    /// Column-style name, matching the dataset schema.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Gdp => "gdp",
            Measure::Population => "population",
            Measure::FossilShareEnergy => "fossil_share_energy",
            Measure::LowCarbonShareEnergy => "low_carbon_share_energy",
            Measure::SolarConsumption => "solar_consumption",
            Measure::WindConsumption => "wind_consumption",
            Measure::EnergyPerGdp => "energy_per_gdp",
            Measure::FossilFuelConsumption => "fossil_fuel_consumption",
            Measure::RenewablesConsumption => "renewables_consumption",
        }
    }

    /// Parses a schema-style measure name.
    pub fn parse(name: &str) -> Option<Measure> {
        match name {
            "gdp" => Some(Measure::Gdp),
            "population" => Some(Measure::Population),
            "fossil_share_energy" => Some(Measure::FossilShareEnergy),
            "low_carbon_share_energy" => Some(Measure::LowCarbonShareEnergy),
            "solar_consumption" => Some(Measure::SolarConsumption),
            "wind_consumption" => Some(Measure::WindConsumption),
            "energy_per_gdp" => Some(Measure::EnergyPerGdp),
            "fossil_fuel_consumption" => Some(Measure::FossilFuelConsumption),
            "renewables_consumption" => Some(Measure::RenewablesConsumption),
            _ => None,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregation operator applied across a bloc's countries in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Mean,
    Sum,
}

impl Aggregate {
    pub fn parse(name: &str) -> Option<Aggregate> {
        match name {
            "mean" => Some(Aggregate::Mean),
            "sum" => Some(Aggregate::Sum),
            _ => None,
        }
    }
}

/// One aggregated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// Ordered yearly values of one measure for one bloc.
#[derive(Debug, Clone, Serialize)]
pub struct YearlySeries {
    pub bloc: Bloc,
    pub measure: Measure,
    pub aggregate: Aggregate,
    /// One point per year present in the cleaned data, ascending.
    pub points: Vec<SeriesPoint>,
}

impl YearlySeries {
    /// Values in year order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Value for a specific year, if present.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.value)
    }
}

/// Aggregates `measure` per (bloc, year) over the cleaned dataset.
///
/// Returns one series per bloc in [`Bloc::ALL`] order. Rows missing an
/// optional measure contribute nothing to that year's operator, and a
/// (bloc, year) pair with no contributing rows produces no point.
/// Deterministic: same dataset in, same series out.
pub fn yearly_series(
    dataset: &CleanedDataset,
    measure: Measure,
    aggregate: Aggregate,
) -> Vec<YearlySeries> {
    let mut acc: BTreeMap<(Bloc, i32), (f64, usize)> = BTreeMap::new();
    for row in &dataset.rows {
        let Some(value) = measure.of(row) else {
            continue;
        };
        let entry = acc.entry((row.bloc, row.year)).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    Bloc::ALL
        .into_iter()
        .map(|bloc| {
            let points = acc
                .iter()
                .filter(|((b, _), _)| *b == bloc)
                .map(|((_, year), (sum, count))| SeriesPoint {
                    year: *year,
                    value: match aggregate {
                        Aggregate::Mean => sum / *count as f64,
                        Aggregate::Sum => *sum,
                    },
                })
                .collect();
            YearlySeries {
                bloc,
                measure,
                aggregate,
                points,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloc::Bloc;
    use crate::data::CleanedRow;

    fn make_row(country: &str, year: i32, share: f64, consumption: f64) -> CleanedRow {
        CleanedRow {
            country: country.to_string(),
            year,
            bloc: Bloc::of(country).expect("bloc country"),
            gdp: 1.0e12,
            population: Some(1.0e7),
            fossil_share_energy: share,
            low_carbon_share_energy: 100.0 - share,
            solar_consumption: None,
            wind_consumption: Some(1.0),
            energy_per_gdp: 1.0,
            fossil_fuel_consumption: consumption,
            renewables_consumption: Some(10.0),
        }
    }

    fn make_dataset() -> CleanedDataset {
        CleanedDataset {
            rows: vec![
                make_row("Germany", 2010, 80.0, 100.0),
                make_row("France", 2010, 60.0, 200.0),
                make_row("China", 2010, 90.0, 1000.0),
                make_row("Germany", 2011, 78.0, 90.0),
            ],
            latest_year: 2011,
        }
    }

    #[test]
    fn mean_averages_across_bloc_countries() {
        let ds = make_dataset();
        let series = yearly_series(&ds, Measure::FossilShareEnergy, Aggregate::Mean);
        let g7 = &series[0];
        assert_eq!(g7.bloc, Bloc::G7);
        assert_eq!(g7.value_at(2010), Some(70.0));
        assert_eq!(g7.value_at(2011), Some(78.0));
    }

    #[test]
    fn sum_totals_across_bloc_countries() {
        let ds = make_dataset();
        let series = yearly_series(&ds, Measure::FossilFuelConsumption, Aggregate::Sum);
        let g7 = &series[0];
        let brics = &series[1];
        assert_eq!(g7.value_at(2010), Some(300.0));
        assert_eq!(brics.value_at(2010), Some(1000.0));
        assert_eq!(brics.value_at(2011), None);
    }

    #[test]
    fn missing_optional_measure_contributes_nothing() {
        let ds = make_dataset();
        let series = yearly_series(&ds, Measure::SolarConsumption, Aggregate::Sum);
        // solar_consumption is None on every fixture row
        assert!(series.iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn aggregation_is_deterministic() {
        let ds = make_dataset();
        let a = yearly_series(&ds, Measure::EnergyPerGdp, Aggregate::Mean);
        let b = yearly_series(&ds, Measure::EnergyPerGdp, Aggregate::Mean);
        for (sa, sb) in a.iter().zip(&b) {
            assert_eq!(sa.points, sb.points);
        }
    }

    #[test]
    fn points_are_year_ordered() {
        let ds = CleanedDataset {
            rows: vec![
                make_row("Japan", 2012, 85.0, 10.0),
                make_row("Japan", 2010, 88.0, 12.0),
                make_row("Japan", 2011, 86.0, 11.0),
            ],
            latest_year: 2012,
        };
        let series = yearly_series(&ds, Measure::FossilShareEnergy, Aggregate::Mean);
        let years: Vec<i32> = series[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2010, 2011, 2012]);
    }

    #[test]
    fn measure_names_round_trip() {
        for m in [
            Measure::Gdp,
            Measure::Population,
            Measure::FossilShareEnergy,
            Measure::LowCarbonShareEnergy,
            Measure::SolarConsumption,
            Measure::WindConsumption,
            Measure::EnergyPerGdp,
            Measure::FossilFuelConsumption,
            Measure::RenewablesConsumption,
        ] {
            assert_eq!(Measure::parse(m.name()), Some(m));
        }
        assert_eq!(Measure::parse("coal_production"), None);
    }
}
