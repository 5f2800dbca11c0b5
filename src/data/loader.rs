//! Load-and-clean pipeline: bloc/year filtering, gdp interpolation, and
//! the completeness drop that yields [`CleanedDataset`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::bloc::Bloc;
use crate::data::schema::{RawRecord, REQUIRED_COLUMNS};
use crate::data::{END_YEAR, START_YEAR};
use crate::error::{DashError, Result};

/// Measures that must be present for a row to survive cleaning.
const REQUIRED_MEASURES: &[&str] = &[
    "gdp",
    "fossil_share_energy",
    "low_carbon_share_energy",
    "energy_per_gdp",
    "fossil_fuel_consumption",
];

/// One cleaned observation. The five required measures are non-optional
/// by construction; the remaining measures may still be missing.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedRow {
    pub country: String,
    pub year: i32,
    pub bloc: Bloc,
    pub gdp: f64,
    pub population: Option<f64>,
    pub fossil_share_energy: f64,
    pub low_carbon_share_energy: f64,
    pub solar_consumption: Option<f64>,
    pub wind_consumption: Option<f64>,
    pub energy_per_gdp: f64,
    pub fossil_fuel_consumption: f64,
    pub renewables_consumption: Option<f64>,
}

/// The cleaned dataset: bloc members only, years in range, required
/// measures present on every row.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedDataset {
    /// Rows ordered by country, then year.
    pub rows: Vec<CleanedRow>,
    /// Maximum year present after cleaning.
    pub latest_year: i32,
}

/// Loads the dataset from `path` and runs the cleaning pipeline.
///
/// # Errors
///
/// * [`DashError::NotFound`] — the path does not resolve to a readable file.
/// * [`DashError::Schema`] — required columns absent from the header.
/// * [`DashError::EmptyResult`] — zero rows survive cleaning.
pub fn load_and_clean(path: &Path) -> Result<CleanedDataset> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DashError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            DashError::Io(e)
        }
    })?;
    let dataset = load_and_clean_from_reader(file)?;
    info!(
        path = %path.display(),
        rows = dataset.rows.len(),
        latest_year = dataset.latest_year,
        "dataset cleaned"
    );
    Ok(dataset)
}

/// Reader-based variant of [`load_and_clean`], used by tests and callers
/// that already hold the bytes.
pub fn load_and_clean_from_reader<R: Read>(reader: R) -> Result<CleanedDataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DashError::Schema { missing });
    }

    // Bloc/year filter happens at parse time; everything else is noise.
    let mut by_country: BTreeMap<String, Vec<RawRecord>> = BTreeMap::new();
    for record in rdr.deserialize() {
        let rec: RawRecord = record?;
        if rec.year < START_YEAR || rec.year > END_YEAR {
            continue;
        }
        if Bloc::of(&rec.country).is_none() {
            continue;
        }
        by_country.entry(rec.country.clone()).or_default().push(rec);
    }

    let mut rows = Vec::new();
    for records in by_country.values_mut() {
        records.sort_by_key(|r| r.year);

        // Interpolate interior gdp gaps within this country's sequence.
        let mut gdp: Vec<Option<f64>> = records.iter().map(|r| r.gdp).collect();
        interpolate_gaps(&mut gdp);

        for (rec, gdp) in records.iter().zip(gdp) {
            let Some(bloc) = Bloc::of(&rec.country) else {
                continue;
            };
            let (
                Some(gdp),
                Some(fossil_share_energy),
                Some(low_carbon_share_energy),
                Some(energy_per_gdp),
                Some(fossil_fuel_consumption),
            ) = (
                gdp,
                rec.fossil_share_energy,
                rec.low_carbon_share_energy,
                rec.energy_per_gdp,
                rec.fossil_fuel_consumption,
            )
            else {
                // Still missing a required measure after interpolation.
                continue;
            };
            rows.push(CleanedRow {
                country: rec.country.clone(),
                year: rec.year,
                bloc,
                gdp,
                population: rec.population,
                fossil_share_energy,
                low_carbon_share_energy,
                solar_consumption: rec.solar_consumption,
                wind_consumption: rec.wind_consumption,
                energy_per_gdp,
                fossil_fuel_consumption,
                renewables_consumption: rec.renewables_consumption,
            });
        }
    }

    if rows.is_empty() {
        return Err(DashError::EmptyResult);
    }

    let latest_year = rows.iter().map(|r| r.year).max().unwrap_or(END_YEAR);
    Ok(CleanedDataset { rows, latest_year })
}

/// Fills interior `None` runs by linear interpolation between the nearest
/// known neighbors. Leading and trailing gaps are left missing — no
/// extrapolation past either end of the sequence.
fn interpolate_gaps(values: &mut [Option<f64>]) {
    let mut last_known: Option<usize> = None;
    for i in 0..values.len() {
        if values[i].is_none() {
            continue;
        }
        if let Some(prev) = last_known {
            let gap = i - prev;
            if gap > 1 {
                let (Some(lo), Some(hi)) = (values[prev], values[i]) else {
                    unreachable!("endpoints of an interior gap are known");
                };
                let step = (hi - lo) / gap as f64;
                for (offset, slot) in values[prev + 1..i].iter_mut().enumerate() {
                    *slot = Some(lo + step * (offset + 1) as f64);
                }
            }
        }
        last_known = Some(i);
    }
}

impl CleanedDataset {
    /// Names of the measures guaranteed present on every row.
    pub fn required_measures() -> &'static [&'static str] {
        REQUIRED_MEASURES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "country,year,gdp,population,fossil_share_energy,\
                          low_carbon_share_energy,solar_consumption,wind_consumption,\
                          energy_per_gdp,fossil_fuel_consumption,renewables_consumption";

    fn row(country: &str, year: i32, gdp: &str) -> String {
        format!("{country},{year},{gdp},1000000,80.0,20.0,1.0,2.0,1.5,500.0,50.0")
    }

    fn dataset_from(lines: &[String]) -> Result<CleanedDataset> {
        let csv = format!("{HEADER}\n{}\n", lines.join("\n"));
        load_and_clean_from_reader(csv.as_bytes())
    }

    #[test]
    fn rows_outside_year_range_are_dropped() {
        let lines = vec![
            row("Japan", 1999, "1.0e12"),
            row("Japan", 2000, "1.0e12"),
            row("Japan", 2022, "1.1e12"),
            row("Japan", 2023, "1.2e12"),
        ];
        let ds = dataset_from(&lines).expect("clean should succeed");
        assert_eq!(ds.rows.len(), 2);
        assert!(ds.rows.iter().all(|r| (2000..=2022).contains(&r.year)));
        assert_eq!(ds.latest_year, 2022);
    }

    #[test]
    fn non_bloc_countries_are_dropped() {
        let lines = vec![row("Norway", 2010, "4.0e11"), row("China", 2010, "1.0e13")];
        let ds = dataset_from(&lines).expect("clean should succeed");
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.rows[0].country, "China");
        assert_eq!(ds.rows[0].bloc, Bloc::Brics);
    }

    #[test]
    fn interior_gdp_gap_is_interpolated() {
        let lines = vec![
            row("India", 2010, "2.0e12"),
            row("India", 2011, ""),
            row("India", 2012, "4.0e12"),
        ];
        let ds = dataset_from(&lines).expect("clean should succeed");
        assert_eq!(ds.rows.len(), 3);
        let mid = ds.rows.iter().find(|r| r.year == 2011).expect("2011 row");
        assert!((mid.gdp - 3.0e12).abs() < 1.0);
    }

    #[test]
    fn leading_and_trailing_gdp_gaps_drop_the_row() {
        let lines = vec![
            row("Brazil", 2010, ""),
            row("Brazil", 2011, "1.5e12"),
            row("Brazil", 2012, ""),
        ];
        let ds = dataset_from(&lines).expect("clean should succeed");
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.rows[0].year, 2011);
    }

    #[test]
    fn missing_other_required_measure_drops_the_row() {
        // fossil_share_energy left empty
        let lines =
            vec!["France,2015,2.0e12,67000000,,49.9,2.0,9.8,0.9,1200.0,150.0".to_string()];
        let err = dataset_from(&lines).expect_err("all rows dropped");
        assert!(matches!(err, DashError::EmptyResult));
    }

    #[test]
    fn missing_column_reports_schema_error() {
        let csv = "country,year,population,fossil_share_energy,low_carbon_share_energy,\
                   solar_consumption,wind_consumption,energy_per_gdp,fossil_fuel_consumption,\
                   renewables_consumption\n";
        let err = load_and_clean_from_reader(csv.as_bytes()).expect_err("schema error");
        match err {
            DashError::Schema { missing } => assert_eq!(missing, vec!["gdp".to_string()]),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn only_foreign_countries_reports_empty_result() {
        let lines = vec![row("Norway", 2010, "4.0e11"), row("Chile", 2011, "2.5e11")];
        let err = dataset_from(&lines).expect_err("empty result");
        assert!(matches!(err, DashError::EmptyResult));
    }

    #[test]
    fn interpolation_is_idempotent_on_complete_series() {
        let mut values: Vec<Option<f64>> = vec![Some(1.0), Some(2.0), Some(3.5)];
        let before = values.clone();
        interpolate_gaps(&mut values);
        assert_eq!(values, before);
    }

    #[test]
    fn interpolation_fills_multi_point_gap_linearly() {
        let mut values = vec![Some(10.0), None, None, Some(40.0)];
        interpolate_gaps(&mut values);
        assert_eq!(values, vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0)]);
    }

    #[test]
    fn interpolation_leaves_edges_missing() {
        let mut values = vec![None, Some(5.0), None];
        interpolate_gaps(&mut values);
        assert_eq!(values, vec![None, Some(5.0), None]);
    }

    #[test]
    fn rows_are_ordered_by_country_then_year() {
        let lines = vec![
            row("Japan", 2011, "1.0e12"),
            row("Japan", 2010, "1.0e12"),
            row("China", 2010, "1.0e13"),
        ];
        let ds = dataset_from(&lines).expect("clean should succeed");
        let order: Vec<(&str, i32)> = ds
            .rows
            .iter()
            .map(|r| (r.country.as_str(), r.year))
            .collect();
        assert_eq!(
            order,
            vec![("China", 2010), ("Japan", 2010), ("Japan", 2011)]
        );
    }
}
