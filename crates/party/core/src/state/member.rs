//! A single captured creature and the operations that mutate it.
//!
//! # Invariants
//!
//! - `level` always equals the curve index implied by `exp`; it is a cache,
//!   never an input.
//! - `attack` always equals [`compute_attack`] over the current fields;
//!   every mutation that feeds the formula recomputes it before returning.
//! - `proteins_used` never exceeds the region-scaled ceiling.
//! - Cross-member invariants (item uniqueness, holder cap) are validated
//!   against the collection census within the same call that consumes the
//!   ledger.

use core::fmt;

use crate::config::GameConfig;
use crate::env::{ConfirmOutcome, ItemDefinition, PartyEnv, Severity, StoneKind, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::progression::level_from_exp;
use crate::state::evolution::EvolutionRule;
use crate::stats::compute_attack;

/// Unique identifier of a member within the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of a held-item request that was not rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeldItemChange {
    /// Equipped into an empty slot.
    Equipped,

    /// The current item was removed (and lost).
    Removed,

    /// The current item was replaced (and lost).
    Swapped,

    /// The user declined to lose the current item. A normal outcome.
    Declined,

    /// The confirmation is pending with the user. State is untouched;
    /// call [`PartyMember::apply_held_item_change`] on acceptance.
    AwaitingConfirmation,
}

/// Rejection raised while assigning a held item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeldItemError {
    /// The species cannot hold this item.
    #[error("{species} cannot use {item}")]
    NotUsable { item: String, species: String },

    /// The ledger has no unit of the item left.
    #[error("no {item} left in the bag")]
    OutOfStock { item: String },

    /// Another member already holds an item of this name.
    #[error("only one {item} can be in use at a time")]
    AlreadyInUse { item: String },

    /// The collection-wide holder cap is saturated.
    #[error("only {max} members can hold items at a time")]
    HoldersFull { max: usize },
}

impl GameError for HeldItemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfStock { .. } => ErrorSeverity::Recoverable,
            Self::NotUsable { .. } | Self::AlreadyInUse { .. } | Self::HoldersFull { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotUsable { .. } => "HELD_ITEM_NOT_USABLE",
            Self::OutOfStock { .. } => "HELD_ITEM_OUT_OF_STOCK",
            Self::AlreadyInUse { .. } => "HELD_ITEM_ALREADY_IN_USE",
            Self::HoldersFull { .. } => "HELD_ITEM_HOLDERS_FULL",
        }
    }
}

/// Rejection raised while spending protein.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProteinError {
    /// A challenge-mode flag disables proteins entirely.
    #[error("proteins are disabled in this challenge mode")]
    Disabled,

    /// The region-scaled usage ceiling is reached.
    #[error("this member cannot increase their power any higher")]
    PowerCapReached,
}

impl GameError for ProteinError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Disabled => "PROTEIN_DISABLED",
            Self::PowerCapReached => "PROTEIN_POWER_CAP",
        }
    }
}

/// A captured creature in the collection.
///
/// Identity (`id`, `species`, `base_attack`) is fixed at creation; the
/// collection store swaps the whole member on evolution. Everything else
/// mutates through the methods below, which keep the cached `level` and
/// `attack` consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct PartyMember {
    pub(crate) id: MemberId,
    pub(crate) species: String,
    pub(crate) base_attack: u32,
    pub(crate) evolutions: Vec<EvolutionRule>,

    pub(crate) attack_bonus_percent: i32,
    pub(crate) attack_bonus_amount: i32,
    pub(crate) proteins_used: u32,
    pub(crate) exp: u64,

    pub(crate) breeding: bool,
    pub(crate) shiny: bool,
    pub(crate) category: u32,

    pub(crate) held_item: Option<ItemDefinition>,

    // Caches, re-derived on every relevant write.
    pub(crate) level: u32,
    pub(crate) attack: u32,
}

impl PartyMember {
    pub fn new(
        id: MemberId,
        species: impl Into<String>,
        base_attack: u32,
        evolutions: Vec<EvolutionRule>,
    ) -> Self {
        let mut member = Self {
            id,
            species: species.into(),
            base_attack,
            evolutions,
            attack_bonus_percent: 0,
            attack_bonus_amount: 0,
            proteins_used: 0,
            exp: 0,
            breeding: false,
            shiny: false,
            category: 0,
            held_item: None,
            level: 1,
            attack: 0,
        };
        member.refresh_attack();
        member
    }

    /// Mark the member shiny at creation; the flag is immutable afterwards.
    pub fn with_shiny(mut self, shiny: bool) -> Self {
        self.shiny = shiny;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    pub fn evolutions(&self) -> &[EvolutionRule] {
        &self.evolutions
    }

    pub fn exp(&self) -> u64 {
        self.exp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    /// Attack with the level factor dropped, for training-independent
    /// rankings.
    pub fn attack_ignoring_level(&self) -> u32 {
        self.compute_current_attack(true)
    }

    pub fn attack_bonus_percent(&self) -> i32 {
        self.attack_bonus_percent
    }

    pub fn attack_bonus_amount(&self) -> i32 {
        self.attack_bonus_amount
    }

    pub fn proteins_used(&self) -> u32 {
        self.proteins_used
    }

    pub fn is_breeding(&self) -> bool {
        self.breeding
    }

    pub fn is_shiny(&self) -> bool {
        self.shiny
    }

    pub fn category(&self) -> u32 {
        self.category
    }

    pub fn held_item(&self) -> Option<&ItemDefinition> {
        self.held_item.as_ref()
    }

    // ========================================================================
    // Setters that keep the caches consistent
    // ========================================================================

    /// Permanent percentage attack modifier; recomputes the cached attack.
    pub fn set_attack_bonus_percent(&mut self, percent: i32) {
        self.attack_bonus_percent = percent;
        self.refresh_attack();
    }

    /// Permanent flat attack modifier; recomputes the cached attack.
    pub fn set_attack_bonus_amount(&mut self, amount: i32) {
        self.attack_bonus_amount = amount;
        self.refresh_attack();
    }

    /// While breeding, evolution checks are suppressed and protein
    /// listings skip the member. Callers re-run
    /// [`check_level_evolutions`](Self::check_level_evolutions) when
    /// breeding ends.
    pub fn set_breeding(&mut self, breeding: bool) {
        self.breeding = breeding;
    }

    /// Cosmetic grouping index; no mechanical effect.
    pub fn set_category(&mut self, category: u32) {
        self.category = category;
    }

    fn compute_current_attack(&self, ignore_level: bool) -> u32 {
        let item_multiplier = self
            .held_item
            .as_ref()
            .map_or(1.0, ItemDefinition::attack_multiplier);
        compute_attack(
            self.base_attack,
            self.attack_bonus_percent,
            self.attack_bonus_amount,
            self.level,
            item_multiplier,
            ignore_level,
        )
    }

    pub(crate) fn refresh_attack(&mut self) {
        self.attack = self.compute_current_attack(false);
    }

    // ========================================================================
    // Progression
    // ========================================================================

    /// Accumulate experience and commit any level change.
    ///
    /// The gain is multiplied by the held item's experience bonus before
    /// accumulating. A level change recomputes the attack and runs the
    /// level-evolution checks; experience never decreases and never resets.
    pub fn gain_exp(&mut self, amount: u64, env: &mut PartyEnv<'_>) {
        let multiplier = self
            .held_item
            .as_ref()
            .map_or(1.0, ItemDefinition::exp_multiplier);
        self.exp += (amount as f64 * multiplier).floor() as u64;

        let old_level = self.level;
        let new_level = self.derive_level(env);
        if new_level != old_level {
            self.level = new_level;
            self.refresh_attack();
            self.check_level_evolutions(env);
        }
    }

    fn derive_level(&self, env: &PartyEnv<'_>) -> u32 {
        match env.species.exp_curve(&self.species) {
            Some(curve) => level_from_exp(curve, self.level, self.exp),
            None => self.level,
        }
    }

    // ========================================================================
    // Evolution
    // ========================================================================

    /// Fire every satisfied level-evolution path.
    ///
    /// No-op while breeding or with no rules. Fired paths are marked
    /// triggered first, so a level dip or a reload cannot re-fire them.
    pub fn check_level_evolutions(&mut self, env: &mut PartyEnv<'_>) {
        if self.breeding || self.evolutions.is_empty() {
            return;
        }

        let id = self.id;
        let level = self.level;
        for rule in &mut self.evolutions {
            let EvolutionRule::Level(path) = rule else {
                continue;
            };
            if !path.triggered && level >= path.min_level {
                path.triggered = true;
                env.evolver.evolve(id, &path.target);
            }
        }
    }

    /// Apply a stone to this member.
    ///
    /// Every satisfied stone path matching `stone` is a candidate; ties are
    /// broken by uniform random choice rather than rule order. Returns
    /// whether an evolution occurred; no candidates means no side effects.
    pub fn use_stone(&self, stone: StoneKind, env: &mut PartyEnv<'_>) -> bool {
        let candidates: Vec<&str> = self
            .evolutions
            .iter()
            .filter(|rule| rule.is_satisfied(self.level))
            .filter_map(|rule| match rule {
                EvolutionRule::Stone(path) if path.stone == stone => Some(path.target.as_str()),
                _ => None,
            })
            .collect();

        if candidates.is_empty() {
            return false;
        }

        let seed = compute_seed(env.game_seed, self.exp, self.id.0, stone as u32);
        let pick = env.rng.range(seed, 0, candidates.len() as u32 - 1) as usize;
        env.evolver.evolve(self.id, candidates[pick])
    }

    // ========================================================================
    // Protein
    // ========================================================================

    /// Uses left before the region-scaled ceiling is reached.
    pub fn protein_uses_remaining(&self, env: &PartyEnv<'_>) -> u32 {
        let cap = (env.progress.highest_region() + 1) * GameConfig::PROTEIN_USES_PER_REGION;
        cap.saturating_sub(self.proteins_used)
    }

    /// Whether protein listings should skip this member.
    pub fn hide_from_protein_list(&self, env: &PartyEnv<'_>) -> bool {
        self.breeding
            || (self.protein_uses_remaining(env) == 0
                && env.settings.hide_maxed_from_protein_list())
    }

    /// Spend protein from the shared ledger on this member.
    ///
    /// The applied amount is clamped to the request, the ledger stock, and
    /// the remaining uses; applying less than requested is not an error.
    /// `proteins_used` moves only after the ledger consumption succeeds.
    /// Returns the amount actually applied.
    pub fn use_protein(
        &mut self,
        requested: u32,
        env: &mut PartyEnv<'_>,
    ) -> Result<u32, ProteinError> {
        if env.settings.disable_proteins() {
            env.notifier
                .notify("Proteins are disabled in this challenge mode.", Severity::Danger);
            return Err(ProteinError::Disabled);
        }

        let remaining = self.protein_uses_remaining(env);
        if remaining == 0 {
            env.notifier.notify(
                "This member cannot increase their power any higher!",
                Severity::Warning,
            );
            return Err(ProteinError::PowerCapReached);
        }

        let applied = requested
            .min(env.ledger.available(GameConfig::PROTEIN_ITEM))
            .min(remaining);
        if applied == 0 {
            return Ok(0);
        }

        if env.ledger.consume(GameConfig::PROTEIN_ITEM, applied) {
            self.proteins_used += applied;
            Ok(applied)
        } else {
            Ok(0)
        }
    }

    // ========================================================================
    // Held items
    // ========================================================================

    /// Request to equip `item`, or to remove it when it is the one held.
    ///
    /// Equipping a different item validates, in order: species eligibility,
    /// ledger stock, collection-wide name uniqueness, and the holder cap.
    /// Each failure notifies and aborts with no state change.
    ///
    /// Removal of the current item (whichever it is) routes through user
    /// confirmation since held items are single use and lost on removal. A
    /// pending answer leaves state untouched; the host re-drives
    /// [`apply_held_item_change`](Self::apply_held_item_change) on
    /// acceptance. Overlapping requests are not guarded here; callers
    /// serialize per member.
    pub fn give_held_item(
        &mut self,
        item: &ItemDefinition,
        env: &mut PartyEnv<'_>,
    ) -> Result<HeldItemChange, HeldItemError> {
        let same_as_held = self
            .held_item
            .as_ref()
            .is_some_and(|held| held.name == item.name);

        if !same_as_held {
            if !item.usable_by(&self.species) {
                env.notifier.notify(
                    &format!("{} cannot use {}.", self.species, item.name),
                    Severity::Warning,
                );
                return Err(HeldItemError::NotUsable {
                    item: item.name.clone(),
                    species: self.species.clone(),
                });
            }
            if env.ledger.available(&item.name) < 1 {
                env.notifier.notify(
                    &format!("You don't have any {} left.", item.name),
                    Severity::Warning,
                );
                return Err(HeldItemError::OutOfStock {
                    item: item.name.clone(),
                });
            }
            if env.census.holder_of(&item.name).is_some() {
                env.notifier.notify(
                    "Only one of each held item can be in use.",
                    Severity::Warning,
                );
                return Err(HeldItemError::AlreadyInUse {
                    item: item.name.clone(),
                });
            }
            if env.census.held_item_count() >= GameConfig::MAX_ITEM_HOLDERS {
                env.notifier.notify(
                    &format!(
                        "Only {} members can hold items at a time.",
                        GameConfig::MAX_ITEM_HOLDERS
                    ),
                    Severity::Warning,
                );
                return Err(HeldItemError::HoldersFull {
                    max: GameConfig::MAX_ITEM_HOLDERS,
                });
            }
        }

        if self.held_item.is_some() {
            let outcome = env.notifier.confirm(
                "Held items are single use only. A removed item is lost. Remove it?",
            );
            match outcome {
                ConfirmOutcome::Accepted => Ok(self.apply_held_item_change(item, env)),
                ConfirmOutcome::Declined => Ok(HeldItemChange::Declined),
                ConfirmOutcome::Pending => Ok(HeldItemChange::AwaitingConfirmation),
            }
        } else {
            Ok(self.apply_held_item_change(item, env))
        }
    }

    /// Continuation for a confirmed held-item change.
    ///
    /// Hosts call this directly when a
    /// [`HeldItemChange::AwaitingConfirmation`] request is later accepted;
    /// a declined request needs no call. Equipping consumes one unit from
    /// the ledger; removal never refunds.
    pub fn apply_held_item_change(
        &mut self,
        item: &ItemDefinition,
        env: &mut PartyEnv<'_>,
    ) -> HeldItemChange {
        let removing = self
            .held_item
            .as_ref()
            .is_some_and(|held| held.name == item.name);

        let change = if removing {
            self.held_item = None;
            HeldItemChange::Removed
        } else {
            env.ledger.consume(&item.name, 1);
            let swapped = self.held_item.is_some();
            self.held_item = Some(item.clone());
            if swapped {
                HeldItemChange::Swapped
            } else {
                HeldItemChange::Equipped
            }
        };

        self.refresh_attack();
        change
    }
}
