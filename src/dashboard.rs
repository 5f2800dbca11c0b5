//! Assembles the complete localized dashboard payload.
//!
//! This is the single structure the rendering surface consumes: resolved
//! narrative text, headline metrics, chart series, and the forecast with
//! its accuracy labels. The cleaned dataset comes from the cache; the
//! forecast is recomputed on every build.

use serde::Serialize;

use crate::analysis::{CountryGrowth, ExecutiveSummary, executive_summary, renewable_growth};
use crate::bloc::Bloc;
use crate::data::CleanedDataset;
use crate::error::DashError;
use crate::forecast::{Accuracy, BlocForecast, forecast_fossil_share};
use crate::i18n::{Locale, MessageKey, render};
use crate::series::{Aggregate, Measure, YearlySeries, yearly_series};

/// One headline metric card.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub caption: String,
}

/// Executive summary section: raw metrics plus formatted cards.
#[derive(Debug, Clone, Serialize)]
pub struct SummarySection {
    pub title: String,
    pub metrics: ExecutiveSummary,
    pub fossil_share: MetricCard,
    pub consumption: MetricCard,
    pub renewables: MetricCard,
}

/// A yearly trend chart with its localized narrative.
#[derive(Debug, Clone, Serialize)]
pub struct TrendChart {
    pub header: String,
    pub insight: String,
    pub series: Vec<YearlySeries>,
    /// Crossover year annotation, on the consumption chart only.
    pub crossover_year: Option<i32>,
}

/// The per-country renewable growth chart.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthChart {
    pub header: String,
    pub insight: String,
    pub rows: Vec<CountryGrowth>,
}

/// Accuracy metric display for one bloc.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastMetric {
    pub label: String,
    pub value: String,
    pub help: String,
}

/// The forecast chart: per-bloc tagged points, accuracy cards, and an
/// advisory warning when any fit degraded to the flat fallback.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastChart {
    pub header: String,
    pub narrative: String,
    pub warning: Option<String>,
    pub metrics: Vec<ForecastMetric>,
    pub blocs: Vec<BlocForecast>,
}

/// Closing theory section.
#[derive(Debug, Clone, Serialize)]
pub struct TheorySection {
    pub title: String,
    pub subtitle: String,
    pub points: Vec<String>,
}

/// The full dashboard payload for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub locale: Locale,
    pub title: String,
    pub subtitle: String,
    pub summary: SummarySection,
    pub deep_dive_title: String,
    pub fossil_share_trend: TrendChart,
    pub energy_intensity_trend: TrendChart,
    pub fossil_consumption_trend: TrendChart,
    pub renewable_growth: GrowthChart,
    pub low_carbon_trend: TrendChart,
    pub forecast: ForecastChart,
    pub theory: TheorySection,
}

/// Builds the dashboard payload from a cleaned dataset.
pub fn build_dashboard(dataset: &CleanedDataset, locale: Locale) -> Dashboard {
    let summary = executive_summary(dataset);
    let crossover_year = summary.crossover.display_year();
    let year_text = crossover_year.to_string();

    let fossil_share_trend = TrendChart {
        header: locale.text(MessageKey::FossilShareHeader).to_string(),
        insight: locale.text(MessageKey::FossilShareInsight).to_string(),
        series: yearly_series(dataset, Measure::FossilShareEnergy, Aggregate::Mean),
        crossover_year: None,
    };
    let energy_intensity_trend = TrendChart {
        header: locale.text(MessageKey::IntensityHeader).to_string(),
        insight: locale.text(MessageKey::IntensityInsight).to_string(),
        series: yearly_series(dataset, Measure::EnergyPerGdp, Aggregate::Mean),
        crossover_year: None,
    };
    let fossil_consumption_trend = TrendChart {
        header: locale.text(MessageKey::ConsumptionHeader).to_string(),
        insight: render(locale.text(MessageKey::ConsumptionInsight), &[&year_text]),
        series: yearly_series(dataset, Measure::FossilFuelConsumption, Aggregate::Sum),
        crossover_year: summary.crossover.is_observed().then_some(crossover_year),
    };
    let low_carbon_trend = TrendChart {
        header: locale.text(MessageKey::LowCarbonHeader).to_string(),
        insight: locale.text(MessageKey::LowCarbonInsight).to_string(),
        series: yearly_series(dataset, Measure::LowCarbonShareEnergy, Aggregate::Mean),
        crossover_year: None,
    };

    let growth = GrowthChart {
        header: locale.text(MessageKey::GrowthHeader).to_string(),
        insight: locale.text(MessageKey::GrowthInsight).to_string(),
        rows: renewable_growth(dataset),
    };

    let blocs = forecast_fossil_share(dataset);
    let forecast = forecast_chart(locale, blocs);

    Dashboard {
        locale,
        title: locale.text(MessageKey::AppTitle).to_string(),
        subtitle: locale.text(MessageKey::AppSubtitle).to_string(),
        summary: summary_section(locale, summary, &year_text),
        deep_dive_title: locale.text(MessageKey::DeepDiveTitle).to_string(),
        fossil_share_trend,
        energy_intensity_trend,
        fossil_consumption_trend,
        renewable_growth: growth,
        low_carbon_trend,
        forecast,
        theory: TheorySection {
            title: locale.text(MessageKey::TheoryTitle).to_string(),
            subtitle: locale.text(MessageKey::TheorySubtitle).to_string(),
            points: vec![
                locale.text(MessageKey::TheoryDecoupling).to_string(),
                locale.text(MessageKey::TheoryDualChallenge).to_string(),
                locale.text(MessageKey::TheoryGeopolitics).to_string(),
            ],
        },
    }
}

fn summary_section(locale: Locale, metrics: ExecutiveSummary, year_text: &str) -> SummarySection {
    let fossil_share = MetricCard {
        label: format!(
            "{} — G7 ({})",
            locale.text(MessageKey::ExecFossilShare),
            metrics.latest_year
        ),
        value: metrics
            .g7_fossil_share_pct
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}%")),
        caption: locale.text(MessageKey::ExecCaptionFossilShare).to_string(),
    };
    let consumption = MetricCard {
        label: format!(
            "{} — BRICS ({})",
            locale.text(MessageKey::ExecAbsoluteConsumption),
            metrics.latest_year
        ),
        value: metrics
            .brics_fossil_consumption_twh
            .map_or_else(|| "n/a".to_string(), |v| format!("{:.1}K TWh", v / 1000.0)),
        caption: render(locale.text(MessageKey::ExecCaptionConsumption), &[year_text]),
    };
    let renewables = MetricCard {
        label: locale.text(MessageKey::ExecRenewablesDominance).to_string(),
        value: metrics
            .brics_low_carbon_share_pct
            .map_or_else(|| "n/a".to_string(), |v| format!("BRICS: {v:.1}%")),
        caption: locale.text(MessageKey::ExecCaptionRenewables).to_string(),
    };
    SummarySection {
        title: locale.text(MessageKey::ExecTitle).to_string(),
        metrics,
        fossil_share,
        consumption,
        renewables,
    }
}

fn forecast_chart(locale: Locale, blocs: Vec<BlocForecast>) -> ForecastChart {
    let warning = blocs.iter().find_map(|b| match &b.accuracy {
        Accuracy::Unavailable { reason } => Some(render(
            locale.text(MessageKey::ForecastWarning),
            &[reason.as_str()],
        )),
        Accuracy::Mape { .. } => None,
    });

    let metrics = blocs
        .iter()
        .map(|b| {
            let label = match b.bloc {
                Bloc::G7 => locale.text(MessageKey::ForecastMetricG7),
                Bloc::Brics => locale.text(MessageKey::ForecastMetricBrics),
            };
            ForecastMetric {
                label: label.to_string(),
                value: match &b.accuracy {
                    Accuracy::Mape { pct } => format!("{pct:.2}%"),
                    Accuracy::Unavailable { .. } => "n/a".to_string(),
                },
                help: locale.text(MessageKey::ForecastMetricHelp).to_string(),
            }
        })
        .collect();

    ForecastChart {
        header: locale.text(MessageKey::ForecastHeader).to_string(),
        narrative: locale.text(MessageKey::ForecastNarrative).to_string(),
        warning,
        metrics,
        blocs,
    }
}

/// Localized message for a render-terminal data error.
pub fn localized_error(locale: Locale, err: &DashError) -> String {
    match err {
        DashError::NotFound { path } => {
            render(locale.text(MessageKey::ErrorFileNotFound), &[path.as_str()])
        }
        DashError::Schema { missing } => render(
            locale.text(MessageKey::ErrorColumns),
            &[missing.join(", ").as_str()],
        ),
        DashError::EmptyResult => locale.text(MessageKey::WarningCleanData).to_string(),
        other => other.to_string(),
    }
}
