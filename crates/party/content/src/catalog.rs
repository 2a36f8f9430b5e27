//! Species and item catalogs backing the core's oracle traits.

use std::collections::HashMap;

use party_core::{
    EvolutionRule, ItemDefinition, ItemOracle, MemberId, PartyMember, SpeciesOracle,
};

use crate::growth::GrowthRate;

/// Static species entry: everything needed to mint a party member.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesDefinition {
    pub name: String,
    pub base_attack: u32,
    pub growth: GrowthRate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evolutions: Vec<EvolutionRule>,
}

/// Species catalog with leveling curves expanded once per growth rate.
#[derive(Clone, Debug)]
pub struct SpeciesCatalog {
    species: HashMap<String, SpeciesDefinition>,
    curves: HashMap<GrowthRate, Vec<u64>>,
}

impl SpeciesCatalog {
    pub fn new(entries: impl IntoIterator<Item = SpeciesDefinition>) -> Self {
        let species = entries
            .into_iter()
            .map(|definition| (definition.name.clone(), definition))
            .collect();
        let curves = GrowthRate::ALL
            .into_iter()
            .map(|growth| (growth, growth.curve()))
            .collect();
        Self { species, curves }
    }

    pub fn get(&self, name: &str) -> Option<&SpeciesDefinition> {
        self.species.get(name)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Mint a fresh member for a newly captured `species`.
    pub fn spawn(&self, id: MemberId, species: &str) -> Option<PartyMember> {
        let definition = self.species.get(species)?;
        Some(PartyMember::new(
            id,
            definition.name.clone(),
            definition.base_attack,
            definition.evolutions.clone(),
        ))
    }
}

impl SpeciesOracle for SpeciesCatalog {
    fn exp_curve(&self, species: &str) -> Option<&[u64]> {
        let definition = self.species.get(species)?;
        self.curves.get(&definition.growth).map(Vec::as_slice)
    }
}

/// Item catalog keyed by name.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(entries: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            items: entries
                .into_iter()
                .map(|definition| (definition.name.clone(), definition))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.get(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.get(name)
    }
}
