//! Item catalog loader.

use std::path::Path;

use party_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let file: ItemCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        tracing::debug!(items = file.items.len(), "loaded item catalog");
        Ok(ItemCatalog::new(file.items))
    }
}

#[cfg(test)]
mod tests {
    use party_core::{HeldItemEffect, ItemKind, StoneKind};

    use super::*;

    const ITEMS_RON: &str = r#"(
    items: [
        (
            name: "Charged Band",
            kind: Held((
                effect: AttackBoost(multiplier: 1.5),
                eligibility: Any,
            )),
        ),
        (
            name: "Ember Charm",
            kind: Held((
                effect: ExpBoost(multiplier: 1.25),
                eligibility: Species(["Embercub"]),
            )),
        ),
        (
            name: "Fire Stone",
            kind: Stone(FireStone),
        ),
        (
            name: "Protein",
            kind: Utility,
        ),
    ],
)"#;

    #[test]
    fn parses_item_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.ron");
        std::fs::write(&path, ITEMS_RON).unwrap();

        let catalog = ItemLoader::load(&path).unwrap();
        assert_eq!(catalog.len(), 4);

        let band = catalog.get("Charged Band").unwrap();
        assert_eq!(band.attack_multiplier(), 1.5);
        assert!(band.usable_by("Embercub"));

        let charm = catalog.get("Ember Charm").unwrap();
        assert!(matches!(
            charm.kind,
            ItemKind::Held(ref data) if data.effect == HeldItemEffect::ExpBoost { multiplier: 1.25 }
        ));
        assert!(charm.usable_by("Embercub"));
        assert!(!charm.usable_by("Sparkit"));

        assert!(matches!(
            catalog.get("Fire Stone").unwrap().kind,
            ItemKind::Stone(StoneKind::FireStone)
        ));
        assert!(matches!(catalog.get("Protein").unwrap().kind, ItemKind::Utility));
    }
}
