//! CSV row schema for the OWID energy dataset.

use serde::Deserialize;

/// Columns that must appear in the CSV header. Absence of any of these is
/// a schema error naming every missing column at once.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "country",
    "year",
    "gdp",
    "population",
    "fossil_share_energy",
    "low_carbon_share_energy",
    "solar_consumption",
    "wind_consumption",
    "energy_per_gdp",
    "fossil_fuel_consumption",
    "renewables_consumption",
];

/// One raw (country, year) record as parsed from the dataset.
///
/// OWID leaves many cells empty, so every numeric analysis column is
/// optional at parse time; the cleaning pass decides which rows survive.
/// Columns outside this set are ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub country: String,
    pub year: i32,
    pub gdp: Option<f64>,
    pub population: Option<f64>,
    pub fossil_share_energy: Option<f64>,
    pub low_carbon_share_energy: Option<f64>,
    pub solar_consumption: Option<f64>,
    pub wind_consumption: Option<f64>,
    pub energy_per_gdp: Option<f64>,
    pub fossil_fuel_consumption: Option<f64>,
    pub renewables_consumption: Option<f64>,
}
