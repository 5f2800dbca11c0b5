//! Derived metrics consumed by the summary and chart narratives.

mod crossover;
mod growth;
mod summary;

pub use crossover::{Crossover, detect_crossover};
pub use growth::{CountryGrowth, GROWTH_BASE_YEAR, renewable_growth};
pub use summary::{ExecutiveSummary, executive_summary};
