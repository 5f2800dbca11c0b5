//! Plain-text rendering of the dashboard payload.

use std::io::{self, Write};

use crate::dashboard::{Dashboard, MetricCard, TrendChart};
use crate::forecast::PointKind;

/// Writes the dashboard as a text report.
pub fn write_report<W: Write>(w: &mut W, dash: &Dashboard) -> io::Result<()> {
    writeln!(w, "{}", dash.title)?;
    writeln!(w, "{}", dash.subtitle)?;
    writeln!(w)?;

    writeln!(w, "--- {} ---", dash.summary.title)?;
    write_metric(w, &dash.summary.fossil_share)?;
    write_metric(w, &dash.summary.consumption)?;
    write_metric(w, &dash.summary.renewables)?;
    writeln!(w)?;

    writeln!(w, "--- {} ---", dash.deep_dive_title)?;
    write_trend(w, &dash.fossil_share_trend)?;
    write_trend(w, &dash.energy_intensity_trend)?;
    write_trend(w, &dash.fossil_consumption_trend)?;

    writeln!(w, "{}", dash.renewable_growth.header)?;
    for row in &dash.renewable_growth.rows {
        let solar = row
            .solar_growth_twh
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:+.1} TWh"));
        let wind = row
            .wind_growth_twh
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:+.1} TWh"));
        writeln!(
            w,
            "  {} ({}): solar {solar}, wind {wind}",
            row.country, row.bloc
        )?;
    }
    writeln!(w, "  {}", dash.renewable_growth.insight)?;
    writeln!(w)?;

    write_trend(w, &dash.low_carbon_trend)?;

    writeln!(w, "{}", dash.forecast.header)?;
    if let Some(warning) = &dash.forecast.warning {
        writeln!(w, "  {warning}")?;
    }
    for (bloc, metric) in dash.forecast.blocs.iter().zip(&dash.forecast.metrics) {
        let last_projection = bloc
            .points
            .iter()
            .filter(|p| p.kind == PointKind::Projection)
            .next_back();
        match last_projection {
            Some(p) => writeln!(
                w,
                "  {}: {} = {} | {} -> {:.1}",
                bloc.bloc, metric.label, metric.value, p.year, p.value
            )?,
            None => writeln!(w, "  {}: {} = {}", bloc.bloc, metric.label, metric.value)?,
        }
    }
    writeln!(w, "  {}", dash.forecast.narrative)?;
    writeln!(w)?;

    writeln!(w, "--- {} ---", dash.theory.title)?;
    writeln!(w, "{}", dash.theory.subtitle)?;
    for point in &dash.theory.points {
        writeln!(w, "* {point}")?;
    }
    Ok(())
}

fn write_metric<W: Write>(w: &mut W, card: &MetricCard) -> io::Result<()> {
    writeln!(w, "{}: {}", card.label, card.value)?;
    writeln!(w, "  {}", card.caption)
}

fn write_trend<W: Write>(w: &mut W, chart: &TrendChart) -> io::Result<()> {
    writeln!(w, "{}", chart.header)?;
    for series in &chart.series {
        if let (Some(first), Some(last)) = (series.points.first(), series.points.last()) {
            writeln!(
                w,
                "  {}: {} {:.2} -> {} {:.2}",
                series.bloc, first.year, first.value, last.year, last.value
            )?;
        }
    }
    if let Some(year) = chart.crossover_year {
        writeln!(w, "  crossover: {year}")?;
    }
    writeln!(w, "  {}", chart.insight)?;
    writeln!(w)
}

/// Prints the report to stdout.
pub fn print_dashboard(dash: &Dashboard) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    // Report output failing means stdout is gone; nothing useful to do.
    let _ = write_report(&mut lock, dash);
}
