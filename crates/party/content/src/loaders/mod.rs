//! RON loaders for catalog data files.
//!
//! Content ships as RON next to the host binary; loaders parse straight
//! into core types and build the in-memory catalogs the oracles serve.

mod item;
mod species;

pub use item::{ItemCatalogFile, ItemLoader};
pub use species::{SpeciesCatalogFile, SpeciesLoader};

use std::path::Path;

/// Result alias for loader operations.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
