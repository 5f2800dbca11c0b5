//! Process-lifetime memo for cleaned datasets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::data::loader::{CleanedDataset, load_and_clean};
use crate::error::Result;

/// Explicit cache for [`CleanedDataset`], keyed by input path.
///
/// Parsing the full OWID file dominates render cost, so the cleaned
/// result is loaded lazily on first access and reused for the life of
/// the process. There is no invalidation: the source file is assumed
/// static while the process runs. Load errors are returned to the caller
/// and never cached, so a fixed file is picked up on the next render.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<CleanedDataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset for `path`, loading and cleaning it on
    /// first access.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<CleanedDataset>> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = entries.get(path) {
            debug!(path = %path.display(), "dataset cache hit");
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(load_and_clean(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
