//! Species catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{SpeciesCatalog, SpeciesDefinition};
use crate::loaders::{LoadResult, read_file};

/// Species catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesCatalogFile {
    pub species: Vec<SpeciesDefinition>,
}

/// Loader for the species catalog from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load a species catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpeciesCatalog> {
        let content = read_file(path)?;
        let file: SpeciesCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;
        tracing::debug!(species = file.species.len(), "loaded species catalog");
        Ok(SpeciesCatalog::new(file.species))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECIES_RON: &str = r#"(
    species: [
        (
            name: "Embercub",
            base_attack: 52,
            growth: MediumFast,
            evolutions: [
                Level((target: "Flaruff", min_level: 16)),
                Stone((target: "Pyrelion", stone: FireStone)),
            ],
        ),
        (
            name: "Flaruff",
            base_attack: 64,
            growth: MediumFast,
        ),
    ],
)"#;

    #[test]
    fn parses_species_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("species.ron");
        std::fs::write(&path, SPECIES_RON).unwrap();

        let catalog = SpeciesLoader::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let embercub = catalog.get("Embercub").unwrap();
        assert_eq!(embercub.base_attack, 52);
        assert_eq!(embercub.evolutions.len(), 2);
        // Omitted fields take their defaults.
        assert!(catalog.get("Flaruff").unwrap().evolutions.is_empty());
    }

    #[test]
    fn missing_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SpeciesLoader::load(&dir.path().join("absent.ron")).is_err());
    }
}
