//! Shared test fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

/// The dataset header with every required column, in schema order.
pub const HEADER: &str = "country,year,gdp,population,fossil_share_energy,\
low_carbon_share_energy,solar_consumption,wind_consumption,energy_per_gdp,\
fossil_fuel_consumption,renewables_consumption";

/// A single dataset row under construction.
pub struct RowSpec {
    pub country: &'static str,
    pub year: i32,
    pub fossil_share: f64,
    pub fossil_consumption: f64,
}

/// Builds a CSV document from the standard header plus literal rows.
pub fn csv_with_rows(rows: &[String]) -> String {
    let mut doc = String::from(HEADER);
    doc.push('\n');
    for row in rows {
        doc.push_str(row);
        doc.push('\n');
    }
    doc
}

/// Formats a complete row where only share and consumption vary.
pub fn row(spec: &RowSpec) -> String {
    format!(
        "{},{},2.0e12,5.0e7,{:.2},{:.2},12.0,24.0,1.5,{:.1},36.0",
        spec.country,
        spec.year,
        spec.fossil_share,
        100.0 - spec.fossil_share,
        spec.fossil_consumption,
    )
}

/// One G7 and one BRICS country with smooth drifts over 2000-2022.
///
/// Germany declines in both share and consumption; China declines in
/// share but grows strongly in consumption. Crossover (BRICS sum above
/// G7 sum of fossil fuel consumption) lands in 2004.
pub fn two_country_csv() -> String {
    let mut rows = Vec::new();
    for (i, year) in (2000..=2022).enumerate() {
        let drift = i as f64;
        rows.push(row(&RowSpec {
            country: "Germany",
            year,
            fossil_share: 82.0 - 0.4 * drift,
            fossil_consumption: 900.0 - 5.0 * drift,
        }));
        rows.push(row(&RowSpec {
            country: "China",
            year,
            fossil_share: 92.0 - 0.2 * drift,
            fossil_consumption: 700.0 + 60.0 * drift,
        }));
    }
    csv_with_rows(&rows)
}

/// Writes `content` to a unique temp file and returns its path.
pub fn temp_csv(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("energy-dash-it-{name}.csv"));
    fs::write(&path, content).expect("fixture write");
    path
}
