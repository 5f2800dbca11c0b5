//! Error types for the dashboard pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, DashError>;

/// Errors that abort a single render pass.
///
/// All three data variants are terminal for the current render but never
/// crash the process: the caller surfaces a localized message and stops
/// drawing. Forecast-fit failure is deliberately *not* here — it degrades
/// to a flat projection instead (see [`crate::forecast::Accuracy`]).
#[derive(Error, Debug)]
pub enum DashError {
    /// The input dataset file does not exist or cannot be opened.
    #[error("dataset not found: {path}")]
    NotFound { path: String },

    /// One or more required columns are absent from the CSV header.
    #[error("missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// No rows survived bloc/year filtering and the completeness drop.
    #[error("no rows remain after cleaning")]
    EmptyResult,

    /// A row failed to parse after the header check passed.
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure while reading the dataset.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
