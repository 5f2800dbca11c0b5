//! CSV export of aggregated series and forecast points.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::forecast::BlocForecast;
use crate::series::YearlySeries;

/// Column header for aggregated series export.
const SERIES_HEADER: &str = "bloc,measure,aggregate,year,value";

/// Column header for forecast export.
const FORECAST_HEADER: &str = "bloc,year,value,kind";

/// Exports aggregated yearly series to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_series_csv(series: &[YearlySeries], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_series_csv(series, buf)
}

/// Writes aggregated yearly series as CSV to any writer.
///
/// One row per (series, year); deterministic for identical inputs.
pub fn write_series_csv(series: &[YearlySeries], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(SERIES_HEADER.split(','))?;
    for s in series {
        let aggregate = match s.aggregate {
            crate::series::Aggregate::Mean => "mean",
            crate::series::Aggregate::Sum => "sum",
        };
        for p in &s.points {
            wtr.write_record(&[
                s.bloc.to_string(),
                s.measure.name().to_string(),
                aggregate.to_string(),
                p.year.to_string(),
                format!("{:.6}", p.value),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes per-bloc forecast points as CSV to any writer.
pub fn write_forecast_csv(blocs: &[BlocForecast], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(FORECAST_HEADER.split(','))?;
    for b in blocs {
        for p in &b.points {
            let kind = match p.kind {
                crate::forecast::PointKind::Historical => "historical",
                crate::forecast::PointKind::Validation => "validation",
                crate::forecast::PointKind::Projection => "projection",
            };
            wtr.write_record(&[
                b.bloc.to_string(),
                p.year.to_string(),
                format!("{:.6}", p.value),
                kind.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
