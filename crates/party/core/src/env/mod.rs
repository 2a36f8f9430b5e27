//! Traits describing the world outside a single party member.
//!
//! Read-only oracles expose catalog data, settings, and campaign progress;
//! the write-capable collaborators (item ledger, collection store, notify
//! channel) are how member operations touch shared state. The [`PartyEnv`]
//! aggregate bundles them so the operations can reach everything they need
//! without hard coupling to concrete implementations.
mod census;
mod items;
mod ledger;
mod memory;
mod notify;
mod progress;
mod rng;
mod settings;
mod species;

pub use census::{EvolutionHandler, PartyCensus};
pub use items::{
    HeldItemData, HeldItemEffect, HoldEligibility, ItemDefinition, ItemKind, ItemOracle, StoneKind,
};
pub use ledger::ItemLedger;
pub use memory::{
    CurveTable, EvolutionLog, ItemTable, MemoryLedger, RosterCensus, SilentNotifier,
    StaticProgress, StaticSettings,
};
pub use notify::{ConfirmOutcome, Notifier, Severity};
pub use progress::ProgressOracle;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use settings::SettingsOracle;
pub use species::SpeciesOracle;

/// Bundles every collaborator a member operation may consult.
///
/// The ledger and the evolution handler are borrowed mutably: checks
/// against them and the matching consumption happen within one operation,
/// which is what keeps the cross-member invariants (item uniqueness,
/// holder cap, protein stock) from racing a stale check. Hosts that allow
/// re-entrancy must serialize `use_protein` / `give_held_item` calls.
pub struct PartyEnv<'a> {
    pub species: &'a dyn SpeciesOracle,
    pub items: &'a dyn ItemOracle,
    pub settings: &'a dyn SettingsOracle,
    pub progress: &'a dyn ProgressOracle,
    pub rng: &'a dyn RngOracle,
    pub census: &'a dyn PartyCensus,
    pub notifier: &'a dyn Notifier,
    pub ledger: &'a mut dyn ItemLedger,
    pub evolver: &'a mut dyn EvolutionHandler,
    /// Host-supplied entropy mixed into per-call seeds; see [`compute_seed`].
    pub game_seed: u64,
}
