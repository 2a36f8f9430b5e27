//! In-memory reference implementations of the collaborator traits.
//!
//! Small hosts, offline tools, and tests use these directly; a full game
//! implements the traits over its own stores instead.

use std::collections::HashMap;

use super::{
    ConfirmOutcome, EvolutionHandler, ItemDefinition, ItemLedger, ItemOracle, Notifier,
    PartyCensus, ProgressOracle, SettingsOracle, Severity, SpeciesOracle,
};
use crate::state::MemberId;

/// Item counts keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    counts: HashMap<String, u32>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stock for `item`.
    pub fn stock(&mut self, item: &str, amount: u32) {
        *self.counts.entry(item.to_owned()).or_default() += amount;
    }
}

impl ItemLedger for MemoryLedger {
    fn available(&self, item: &str) -> u32 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    fn consume(&mut self, item: &str, amount: u32) -> bool {
        match self.counts.get_mut(item) {
            Some(count) if *count >= amount => {
                *count -= amount;
                true
            }
            _ => false,
        }
    }

    fn give(&mut self, item: &str, amount: u32) {
        self.stock(item, amount);
    }
}

/// Leveling curves keyed by species name.
#[derive(Clone, Debug, Default)]
pub struct CurveTable {
    curves: HashMap<String, Vec<u64>>,
}

impl CurveTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species: &str, curve: Vec<u64>) {
        self.curves.insert(species.to_owned(), curve);
    }
}

impl SpeciesOracle for CurveTable {
    fn exp_curve(&self, species: &str) -> Option<&[u64]> {
        self.curves.get(species).map(Vec::as_slice)
    }
}

/// Item definitions keyed by name.
#[derive(Clone, Debug, Default)]
pub struct ItemTable {
    items: HashMap<String, ItemDefinition>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: ItemDefinition) {
        self.items.insert(definition.name.clone(), definition);
    }
}

impl ItemOracle for ItemTable {
    fn item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.get(name)
    }
}

/// Fixed settings flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSettings {
    pub disable_proteins: bool,
    pub hide_maxed_from_protein_list: bool,
}

impl SettingsOracle for StaticSettings {
    fn disable_proteins(&self) -> bool {
        self.disable_proteins
    }

    fn hide_maxed_from_protein_list(&self) -> bool {
        self.hide_maxed_from_protein_list
    }
}

/// Fixed campaign progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticProgress {
    pub highest_region: u32,
}

impl ProgressOracle for StaticProgress {
    fn highest_region(&self) -> u32 {
        self.highest_region
    }
}

/// Census over a snapshot of (member, held item) pairs.
#[derive(Clone, Debug, Default)]
pub struct RosterCensus {
    holders: Vec<(MemberId, String)>,
}

impl RosterCensus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `member` currently holds `item`.
    pub fn record(&mut self, member: MemberId, item: &str) {
        self.holders.push((member, item.to_owned()));
    }
}

impl PartyCensus for RosterCensus {
    fn held_item_count(&self) -> usize {
        self.holders.len()
    }

    fn holder_of(&self, item: &str) -> Option<MemberId> {
        self.holders
            .iter()
            .find(|(_, held)| held == item)
            .map(|(member, _)| *member)
    }
}

/// Records requested evolutions instead of applying them.
#[derive(Clone, Debug, Default)]
pub struct EvolutionLog {
    events: Vec<(MemberId, String)>,
}

impl EvolutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[(MemberId, String)] {
        &self.events
    }
}

impl EvolutionHandler for EvolutionLog {
    fn evolve(&mut self, member: MemberId, target: &str) -> bool {
        self.events.push((member, target.to_owned()));
        true
    }
}

/// Drops notices; confirmations accept immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}

    fn confirm(&self, _message: &str) -> ConfirmOutcome {
        ConfirmOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_refuses_partial_spend() {
        let mut ledger = MemoryLedger::new();
        ledger.stock("Protein", 3);

        assert!(!ledger.consume("Protein", 4));
        assert_eq!(ledger.available("Protein"), 3);
        assert!(ledger.consume("Protein", 3));
        assert_eq!(ledger.available("Protein"), 0);
        assert!(!ledger.consume("Oran Berry", 1));
    }

    #[test]
    fn census_reports_holders() {
        let mut census = RosterCensus::new();
        census.record(MemberId(4), "Charged Band");

        assert_eq!(census.held_item_count(), 1);
        assert_eq!(census.holder_of("Charged Band"), Some(MemberId(4)));
        assert_eq!(census.holder_of("Lucky Egg"), None);
    }
}
