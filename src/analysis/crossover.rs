//! Fossil-consumption crossover detection between the two blocs.

use serde::Serialize;

use crate::bloc::Bloc;
use crate::data::CleanedDataset;
use crate::series::{Aggregate, Measure, yearly_series};

/// Result of the crossover search.
///
/// "No crossover in range" is a distinct variant rather than a sentinel
/// year, so a genuine late-range crossover cannot be confused with an
/// absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Crossover {
    /// Earliest year where the BRICS total strictly exceeds the G7 total.
    Found { year: i32 },
    /// No such year exists within the cleaned data range.
    NotObserved { latest_year: i32 },
}

impl Crossover {
    /// Year used when rendering the narrative caption. For
    /// `NotObserved` this falls back to the dataset's last year.
    pub fn display_year(&self) -> i32 {
        match self {
            Crossover::Found { year } => *year,
            Crossover::NotObserved { latest_year } => *latest_year,
        }
    }

    pub fn is_observed(&self) -> bool {
        matches!(self, Crossover::Found { .. })
    }
}

/// Finds the earliest year where the BRICS sum of fossil-fuel
/// consumption strictly exceeds the G7 sum. Years present for only one
/// bloc cannot cross and are skipped.
pub fn detect_crossover(dataset: &CleanedDataset) -> Crossover {
    let series = yearly_series(dataset, Measure::FossilFuelConsumption, Aggregate::Sum);
    let g7 = series.iter().find(|s| s.bloc == Bloc::G7);
    let brics = series.iter().find(|s| s.bloc == Bloc::Brics);

    if let (Some(g7), Some(brics)) = (g7, brics) {
        for point in &brics.points {
            if let Some(g7_value) = g7.value_at(point.year) {
                if point.value > g7_value {
                    return Crossover::Found { year: point.year };
                }
            }
        }
    }
    Crossover::NotObserved {
        latest_year: dataset.latest_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CleanedRow;

    fn consumption_row(country: &str, year: i32, consumption: f64) -> CleanedRow {
        CleanedRow {
            country: country.to_string(),
            year,
            bloc: Bloc::of(country).expect("bloc country"),
            gdp: 1.0e12,
            population: None,
            fossil_share_energy: 80.0,
            low_carbon_share_energy: 20.0,
            solar_consumption: None,
            wind_consumption: None,
            energy_per_gdp: 1.0,
            fossil_fuel_consumption: consumption,
            renewables_consumption: None,
        }
    }

    /// BRICS below G7 through 2009, above from 2010 onward.
    fn switch_dataset() -> CleanedDataset {
        let mut rows = Vec::new();
        for year in 2000..=2015 {
            let (g7, brics) = if year < 2010 {
                (1000.0, 800.0)
            } else {
                (1000.0, 1200.0)
            };
            rows.push(consumption_row("United States", year, g7));
            rows.push(consumption_row("China", year, brics));
        }
        CleanedDataset {
            rows,
            latest_year: 2015,
        }
    }

    #[test]
    fn finds_earliest_crossover_year() {
        let crossover = detect_crossover(&switch_dataset());
        assert_eq!(crossover, Crossover::Found { year: 2010 });
        assert_eq!(crossover.display_year(), 2010);
    }

    #[test]
    fn no_crossover_reports_not_observed() {
        let mut rows = Vec::new();
        for year in 2000..=2010 {
            rows.push(consumption_row("United States", year, 2000.0));
            rows.push(consumption_row("China", year, 1500.0));
        }
        let ds = CleanedDataset {
            rows,
            latest_year: 2010,
        };
        let crossover = detect_crossover(&ds);
        assert_eq!(crossover, Crossover::NotObserved { latest_year: 2010 });
        assert!(!crossover.is_observed());
        assert_eq!(crossover.display_year(), 2010);
    }

    #[test]
    fn equal_totals_do_not_cross() {
        let rows = vec![
            consumption_row("United States", 2005, 1000.0),
            consumption_row("China", 2005, 1000.0),
        ];
        let ds = CleanedDataset {
            rows,
            latest_year: 2005,
        };
        assert!(!detect_crossover(&ds).is_observed());
    }

    #[test]
    fn one_sided_years_are_skipped() {
        // BRICS-only year before the first shared year must not count.
        let rows = vec![
            consumption_row("China", 2003, 5000.0),
            consumption_row("United States", 2004, 1000.0),
            consumption_row("China", 2004, 1500.0),
        ];
        let ds = CleanedDataset {
            rows,
            latest_year: 2004,
        };
        assert_eq!(detect_crossover(&ds), Crossover::Found { year: 2004 });
    }
}
