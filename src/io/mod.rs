//! File output for aggregated series and forecasts.

pub mod export;
