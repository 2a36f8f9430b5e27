//! Mutable party-member state and the operations that keep it consistent.
mod evolution;
mod member;

pub use evolution::{EvolutionRule, LevelEvolution, StoneEvolution};
pub use member::{HeldItemChange, HeldItemError, MemberId, PartyMember, ProteinError};
