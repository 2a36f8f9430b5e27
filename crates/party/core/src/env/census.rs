use crate::state::MemberId;

/// Collection-wide facts the held-item protocol consults.
///
/// The census covers the whole collection, the requesting member
/// included; a swap while the holder cap is saturated is rejected.
pub trait PartyCensus: Send + Sync {
    /// Number of members currently holding any item.
    fn held_item_count(&self) -> usize;

    /// The member currently holding `item`, if any.
    fn holder_of(&self, item: &str) -> Option<MemberId>;
}

/// Applies an evolution by replacing a member's identity in the
/// collection store.
pub trait EvolutionHandler: Send + Sync {
    /// Transition `member` into `target`. Returns whether the evolution
    /// actually happened.
    fn evolve(&mut self, member: MemberId, target: &str) -> bool;
}
