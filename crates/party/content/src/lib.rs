//! Data-driven content for the party progression core.
//!
//! This crate houses static catalog data and provides loaders for RON data
//! files:
//! - Species definitions (base attack, growth rate, evolution paths)
//! - Leveling curves per growth rate
//! - Item catalogs (held items, stones, utility items)
//!
//! Content is consumed through the core's oracle traits and never appears
//! in member state.

pub mod catalog;
pub mod growth;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ItemCatalog, SpeciesCatalog, SpeciesDefinition};
pub use growth::GrowthRate;

#[cfg(feature = "loaders")]
pub use loaders::{ItemLoader, SpeciesLoader};
