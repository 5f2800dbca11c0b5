//! API query and error response types.

use serde::{Deserialize, Serialize};

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Locale code (`en` or `id`); falls back to the configured default.
    pub lang: Option<String>,
}

/// Query parameters for the series endpoint.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Measure name in dataset-schema form (e.g. `fossil_share_energy`).
    pub measure: String,
    /// Aggregation operator: `mean` (default) or `sum`.
    pub agg: Option<String>,
}

/// Error response body for 4xx/5xx results.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable, localized where the error supports it.
    pub error: String,
}
