//! Deterministic party-member progression rules shared across hosts.
//!
//! `party-core` defines the canonical mechanics for a single captured
//! creature — leveling, attack derivation, protein boosts, held items,
//! evolutions — and the compact keyed save record. All external data
//! (catalogs, the item ledger, settings, the collection itself) is reached
//! through the collaborator traits in [`env`], so the same rules serve a
//! game loop, offline tools, and tests without hard coupling.
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
#[cfg(feature = "serde")]
pub mod save;
pub mod state;
pub mod stats;

pub use config::GameConfig;
pub use env::{
    ConfirmOutcome, CurveTable, EvolutionHandler, EvolutionLog, HeldItemData, HeldItemEffect,
    HoldEligibility, ItemDefinition, ItemKind, ItemLedger, ItemOracle, ItemTable, MemoryLedger,
    Notifier, PartyCensus, PartyEnv, PcgRng, ProgressOracle, RngOracle, RosterCensus,
    SettingsOracle, Severity, SilentNotifier, SpeciesOracle, StaticProgress, StaticSettings,
    StoneKind, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
#[cfg(feature = "serde")]
pub use save::SaveKey;
pub use state::{
    EvolutionRule, HeldItemChange, HeldItemError, LevelEvolution, MemberId, PartyMember,
    ProteinError, StoneEvolution,
};
pub use stats::compute_attack;
