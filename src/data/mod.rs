//! Dataset loading, cleaning, and caching.

mod cache;
mod loader;
mod schema;

pub use cache::DatasetCache;
pub use loader::{CleanedDataset, CleanedRow, load_and_clean, load_and_clean_from_reader};
pub use schema::{RawRecord, REQUIRED_COLUMNS};

/// First year of the analysis window (inclusive).
pub const START_YEAR: i32 = 2000;

/// Last year of the analysis window (inclusive).
pub const END_YEAR: i32 = 2022;
