//! Per-country solar and wind consumption growth since the base year.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bloc::Bloc;
use crate::data::CleanedDataset;

/// Base year for the renewable growth comparison.
pub const GROWTH_BASE_YEAR: i32 = 2012;

/// Solar and wind growth for one country between the base year and the
/// dataset's latest year. A side is `None` when either endpoint is
/// missing for that country.
#[derive(Debug, Clone, Serialize)]
pub struct CountryGrowth {
    pub country: String,
    pub bloc: Bloc,
    pub solar_growth_twh: Option<f64>,
    pub wind_growth_twh: Option<f64>,
}

impl CountryGrowth {
    /// Combined growth used for ordering; missing sides count as zero.
    fn total(&self) -> f64 {
        self.solar_growth_twh.unwrap_or(0.0) + self.wind_growth_twh.unwrap_or(0.0)
    }
}

/// Computes per-country growth of solar and wind consumption from
/// [`GROWTH_BASE_YEAR`] to the dataset's latest year, ordered by total
/// growth descending (ties broken by country name for determinism).
pub fn renewable_growth(dataset: &CleanedDataset) -> Vec<CountryGrowth> {
    #[derive(Default)]
    struct Endpoints {
        bloc: Option<Bloc>,
        solar_base: Option<f64>,
        solar_latest: Option<f64>,
        wind_base: Option<f64>,
        wind_latest: Option<f64>,
    }

    let mut by_country: BTreeMap<&str, Endpoints> = BTreeMap::new();
    for row in &dataset.rows {
        if row.year != GROWTH_BASE_YEAR && row.year != dataset.latest_year {
            continue;
        }
        let entry = by_country.entry(row.country.as_str()).or_default();
        entry.bloc = Some(row.bloc);
        if row.year == GROWTH_BASE_YEAR {
            entry.solar_base = row.solar_consumption;
            entry.wind_base = row.wind_consumption;
        }
        if row.year == dataset.latest_year {
            entry.solar_latest = row.solar_consumption;
            entry.wind_latest = row.wind_consumption;
        }
    }

    let mut growth: Vec<CountryGrowth> = by_country
        .into_iter()
        .filter_map(|(country, e)| {
            let bloc = e.bloc?;
            Some(CountryGrowth {
                country: country.to_string(),
                bloc,
                solar_growth_twh: match (e.solar_base, e.solar_latest) {
                    (Some(base), Some(latest)) => Some(latest - base),
                    _ => None,
                },
                wind_growth_twh: match (e.wind_base, e.wind_latest) {
                    (Some(base), Some(latest)) => Some(latest - base),
                    _ => None,
                },
            })
        })
        .collect();

    growth.sort_by(|a, b| {
        b.total()
            .partial_cmp(&a.total())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.country.cmp(&b.country))
    });
    growth
}
