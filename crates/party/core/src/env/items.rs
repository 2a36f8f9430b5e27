/// Oracle resolving item names against the catalog.
pub trait ItemOracle: Send + Sync {
    fn item(&self, name: &str) -> Option<&ItemDefinition>;
}

/// Item definition with common fields and kind-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds the name, which doubles as the ledger and save key
/// - `kind` enum holds kind-specific data (held-item effects, stone kinds)
/// - Display strings live with the host's presentation layer
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Whether `species` may hold this item. Always false for items that
    /// are not held items.
    pub fn usable_by(&self, species: &str) -> bool {
        match &self.kind {
            ItemKind::Held(data) => data.eligibility.allows(species),
            _ => false,
        }
    }

    /// Multiplier this item applies to the attack formula while held.
    pub fn attack_multiplier(&self) -> f64 {
        match &self.kind {
            ItemKind::Held(HeldItemData {
                effect: HeldItemEffect::AttackBoost { multiplier },
                ..
            }) => *multiplier,
            _ => 1.0,
        }
    }

    /// Multiplier this item applies to experience gain while held.
    pub fn exp_multiplier(&self) -> f64 {
        match &self.kind {
            ItemKind::Held(HeldItemData {
                effect: HeldItemEffect::ExpBoost { multiplier },
                ..
            }) => *multiplier,
            _ => 1.0,
        }
    }
}

/// Item type with kind-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable held item.
    Held(HeldItemData),

    /// Evolution stone.
    Stone(StoneKind),

    /// Utility item (protein, currencies, quest items).
    Utility,
}

/// Held-item specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldItemData {
    pub effect: HeldItemEffect,
    pub eligibility: HoldEligibility,
}

impl HeldItemData {
    pub fn new(effect: HeldItemEffect, eligibility: HoldEligibility) -> Self {
        Self {
            effect,
            eligibility,
        }
    }
}

/// Passive effect a held item grants its holder.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeldItemEffect {
    /// Multiplies the holder's attack (e.g. 1.5).
    AttackBoost { multiplier: f64 },

    /// Multiplies experience gained by the holder.
    ExpBoost { multiplier: f64 },
}

/// Which species may hold an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoldEligibility {
    /// Any species.
    Any,

    /// Only the listed species.
    Species(Vec<String>),
}

impl HoldEligibility {
    pub fn allows(&self, species: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Species(names) => names.iter().any(|name| name == species),
        }
    }
}

/// Evolution stone kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoneKind {
    FireStone,
    WaterStone,
    ThunderStone,
    LeafStone,
    MoonStone,
    SunStone,
    TradeStone,
    KingsRock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_lists_are_exact() {
        let data = HeldItemData::new(
            HeldItemEffect::AttackBoost { multiplier: 1.5 },
            HoldEligibility::Species(vec!["Sparkit".into()]),
        );
        let item = ItemDefinition::new("Charged Band", ItemKind::Held(data));

        assert!(item.usable_by("Sparkit"));
        assert!(!item.usable_by("Embercub"));
    }

    #[test]
    fn non_held_items_grant_no_multipliers() {
        let stone = ItemDefinition::new("Fire Stone", ItemKind::Stone(StoneKind::FireStone));
        assert_eq!(stone.attack_multiplier(), 1.0);
        assert_eq!(stone.exp_multiplier(), 1.0);
        assert!(!stone.usable_by("Embercub"));
    }

    #[test]
    fn stone_kinds_parse_from_snake_case() {
        use core::str::FromStr;
        assert_eq!(StoneKind::from_str("fire_stone").unwrap(), StoneKind::FireStone);
        assert_eq!(StoneKind::KingsRock.to_string(), "kings_rock");
    }
}
