//! G7 vs. BRICS energy transition analytics.
//!
//! Loads the OWID energy dataset, cleans it down to the two blocs,
//! aggregates per-bloc yearly series, forecasts fossil share with an
//! ARIMA(1,1,0) model, and assembles a bilingual dashboard payload.

pub mod analysis;
#[cfg(feature = "api")]
pub mod api;
pub mod bloc;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod forecast;
pub mod i18n;
pub mod io;
pub mod report;
pub mod series;
