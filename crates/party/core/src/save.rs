//! Keyed save-record codec.
//!
//! A member persists as a flat JSON object under short numeric keys, with
//! the identity under a literal `"id"` key. Fields equal to their defaults
//! are elided to keep the record small; both directions consult the same
//! defaults table. The cached level and attack never persist — the level
//! is re-derived from the loaded experience and the attack recomputed
//! afterwards.

use serde_json::{Map, Value};

use crate::env::{ItemKind, ItemOracle, SpeciesOracle};
use crate::progression::level_from_exp;
use crate::state::{EvolutionRule, PartyMember};

/// Record keys, fixed by the save format.
///
/// Discriminants are the wire keys; changing them breaks every existing
/// save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SaveKey {
    AttackBonusPercent = 0,
    AttackBonusAmount = 1,
    ProteinsUsed = 2,
    Exp = 3,
    Breeding = 4,
    Shiny = 5,
    Category = 6,
    LevelEvolutionTriggered = 7,
    HeldItem = 8,
}

impl SaveKey {
    /// Wire representation of the key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AttackBonusPercent => "0",
            Self::AttackBonusAmount => "1",
            Self::ProteinsUsed => "2",
            Self::Exp => "3",
            Self::Breeding => "4",
            Self::Shiny => "5",
            Self::Category => "6",
            Self::LevelEvolutionTriggered => "7",
            Self::HeldItem => "8",
        }
    }
}

/// Identity key, stored literally rather than numerically.
const ID_KEY: &str = "id";

/// Per-field defaults, consulted by both encode (elision) and decode
/// (fallback).
mod defaults {
    pub const ATTACK_BONUS_PERCENT: i32 = 0;
    pub const ATTACK_BONUS_AMOUNT: i32 = 0;
    pub const PROTEINS_USED: u32 = 0;
    pub const EXP: u64 = 0;
    pub const BREEDING: bool = false;
    pub const SHINY: bool = false;
    pub const CATEGORY: u32 = 0;
    pub const LEVEL_EVOLUTION_TRIGGERED: bool = false;
}

impl PartyMember {
    /// Encode into the keyed record, eliding defaults.
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert(ID_KEY.to_owned(), Value::from(self.id.0));

        put_if_nondefault(
            &mut record,
            SaveKey::AttackBonusPercent,
            self.attack_bonus_percent,
            defaults::ATTACK_BONUS_PERCENT,
        );
        put_if_nondefault(
            &mut record,
            SaveKey::AttackBonusAmount,
            self.attack_bonus_amount,
            defaults::ATTACK_BONUS_AMOUNT,
        );
        put_if_nondefault(
            &mut record,
            SaveKey::ProteinsUsed,
            self.proteins_used,
            defaults::PROTEINS_USED,
        );
        put_if_nondefault(&mut record, SaveKey::Exp, self.exp, defaults::EXP);
        put_if_nondefault(&mut record, SaveKey::Breeding, self.breeding, defaults::BREEDING);
        put_if_nondefault(&mut record, SaveKey::Shiny, self.shiny, defaults::SHINY);
        put_if_nondefault(&mut record, SaveKey::Category, self.category, defaults::CATEGORY);

        // One aggregate flag across all level paths; per-path granularity
        // is not part of the format.
        let triggered = self.evolutions.iter().any(
            |rule| matches!(rule, EvolutionRule::Level(path) if path.triggered),
        );
        put_if_nondefault(
            &mut record,
            SaveKey::LevelEvolutionTriggered,
            triggered,
            defaults::LEVEL_EVOLUTION_TRIGGERED,
        );

        if let Some(item) = &self.held_item {
            record.insert(
                SaveKey::HeldItem.as_str().to_owned(),
                Value::from(item.name.clone()),
            );
        }

        Value::Object(record)
    }

    /// Restore from a keyed record.
    ///
    /// A missing record or one without an id is ignored. Every field falls
    /// back to its default when absent or malformed. The level is
    /// re-derived from the loaded experience and the attack recomputed; a
    /// held-item name that does not resolve to a held item in the catalog
    /// loads as no item held. The aggregate triggered flag is broadcast to
    /// every level path.
    pub fn load_record(
        &mut self,
        record: &Value,
        species: &dyn SpeciesOracle,
        items: &dyn ItemOracle,
    ) {
        let Some(record) = record.as_object() else {
            return;
        };
        if !record.contains_key(ID_KEY) {
            return;
        }

        self.attack_bonus_percent = get_i64(record, SaveKey::AttackBonusPercent)
            .map_or(defaults::ATTACK_BONUS_PERCENT, |v| v as i32);
        self.attack_bonus_amount = get_i64(record, SaveKey::AttackBonusAmount)
            .map_or(defaults::ATTACK_BONUS_AMOUNT, |v| v as i32);
        self.proteins_used =
            get_u64(record, SaveKey::ProteinsUsed).map_or(defaults::PROTEINS_USED, |v| v as u32);
        self.exp = get_u64(record, SaveKey::Exp).unwrap_or(defaults::EXP);
        self.breeding = get_bool(record, SaveKey::Breeding).unwrap_or(defaults::BREEDING);
        self.shiny = get_bool(record, SaveKey::Shiny).unwrap_or(defaults::SHINY);
        self.category =
            get_u64(record, SaveKey::Category).map_or(defaults::CATEGORY, |v| v as u32);

        self.held_item = record
            .get(SaveKey::HeldItem.as_str())
            .and_then(Value::as_str)
            .and_then(|name| items.item(name))
            .filter(|definition| matches!(definition.kind, ItemKind::Held(_)))
            .cloned();

        let triggered = get_bool(record, SaveKey::LevelEvolutionTriggered)
            .unwrap_or(defaults::LEVEL_EVOLUTION_TRIGGERED);
        for rule in &mut self.evolutions {
            if let EvolutionRule::Level(path) = rule {
                path.triggered = triggered;
            }
        }

        self.level = match species.exp_curve(&self.species) {
            Some(curve) => level_from_exp(curve, 1, self.exp),
            None => self.level,
        };
        self.refresh_attack();
    }
}

fn put_if_nondefault<T>(record: &mut Map<String, Value>, key: SaveKey, value: T, default: T)
where
    T: PartialEq + Into<Value>,
{
    if value != default {
        record.insert(key.as_str().to_owned(), value.into());
    }
}

fn get_u64(record: &Map<String, Value>, key: SaveKey) -> Option<u64> {
    record.get(key.as_str()).and_then(Value::as_u64)
}

fn get_i64(record: &Map<String, Value>, key: SaveKey) -> Option<i64> {
    record.get(key.as_str()).and_then(Value::as_i64)
}

fn get_bool(record: &Map<String, Value>, key: SaveKey) -> Option<bool> {
    record.get(key.as_str()).and_then(Value::as_bool)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::env::{
        CurveTable, HeldItemData, HeldItemEffect, HoldEligibility, ItemDefinition, ItemTable,
        StoneKind,
    };
    use crate::state::{LevelEvolution, MemberId, StoneEvolution};

    fn catalogs() -> (CurveTable, ItemTable) {
        let mut curves = CurveTable::new();
        curves.insert("Sparkit", vec![0, 100, 250, 500]);

        let mut items = ItemTable::new();
        items.insert(ItemDefinition::new(
            "Charged Band",
            ItemKind::Held(HeldItemData::new(
                HeldItemEffect::AttackBoost { multiplier: 1.5 },
                HoldEligibility::Any,
            )),
        ));
        items.insert(ItemDefinition::new(
            "Fire Stone",
            ItemKind::Stone(StoneKind::FireStone),
        ));

        (curves, items)
    }

    fn sparkit() -> PartyMember {
        PartyMember::new(
            MemberId(7),
            "Sparkit",
            50,
            vec![
                EvolutionRule::Level(LevelEvolution::new("Voltail", 16)),
                EvolutionRule::Level(LevelEvolution::new("Stormane", 36)),
                EvolutionRule::Stone(StoneEvolution::new("Tidemane", StoneKind::WaterStone)),
            ],
        )
    }

    #[test]
    fn a_default_member_persists_as_id_only() {
        let record = sparkit().to_record();
        let object = record.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("id"), Some(&json!(7)));
    }

    #[test]
    fn non_default_fields_round_trip() {
        let (curves, items) = catalogs();
        let mut member = sparkit().with_shiny(true);
        member.set_attack_bonus_percent(10);
        member.set_attack_bonus_amount(5);
        member.proteins_used = 4;
        member.exp = 110;
        member.set_category(3);
        member.held_item = items.item("Charged Band").cloned();
        if let EvolutionRule::Level(path) = &mut member.evolutions[0] {
            path.triggered = true;
        }

        let record = member.to_record();

        let mut restored = sparkit();
        restored.load_record(&record, &curves, &items);

        assert_eq!(restored.attack_bonus_percent(), 10);
        assert_eq!(restored.attack_bonus_amount(), 5);
        assert_eq!(restored.proteins_used(), 4);
        assert_eq!(restored.exp(), 110);
        assert!(restored.is_shiny());
        assert_eq!(restored.category(), 3);
        assert_eq!(restored.held_item().unwrap().name, "Charged Band");

        // Level is derived, never read: exp 110 sits past the 100 threshold.
        assert_eq!(restored.level(), 2);
        assert_eq!(
            restored.attack(),
            crate::stats::compute_attack(50, 10, 5, 2, 1.5, false)
        );
    }

    #[test]
    fn elided_keys_reset_to_defaults() {
        let (curves, items) = catalogs();
        let mut member = sparkit();
        member.set_attack_bonus_percent(25);
        member.exp = 300;

        // A sparse record carrying only the id: every elided field means
        // "default", even if the in-memory member currently differs.
        member.load_record(&json!({ "id": 7 }), &curves, &items);

        assert_eq!(member.attack_bonus_percent(), 0);
        assert_eq!(member.exp(), 0);
        assert_eq!(member.level(), 1);
        assert!(member.held_item().is_none());
    }

    #[test]
    fn records_without_an_id_are_ignored() {
        let (curves, items) = catalogs();
        let mut member = sparkit();
        member.exp = 300;

        member.load_record(&json!({ "3": 0 }), &curves, &items);
        assert_eq!(member.exp(), 300);

        member.load_record(&Value::Null, &curves, &items);
        assert_eq!(member.exp(), 300);
    }

    #[test]
    fn unresolvable_held_items_load_as_none() {
        let (curves, items) = catalogs();

        let mut member = sparkit();
        member.load_record(&json!({ "id": 7, "8": "Rusty Bell" }), &curves, &items);
        assert!(member.held_item().is_none());

        // A name that resolves to a non-held item is treated the same.
        let mut member = sparkit();
        member.load_record(&json!({ "id": 7, "8": "Fire Stone" }), &curves, &items);
        assert!(member.held_item().is_none());
    }

    #[test]
    fn the_triggered_flag_is_broadcast_to_every_level_path() {
        let (curves, items) = catalogs();
        let mut member = sparkit();

        member.load_record(&json!({ "id": 7, "7": true }), &curves, &items);
        let triggered: Vec<bool> = member
            .evolutions()
            .iter()
            .filter_map(|rule| match rule {
                EvolutionRule::Level(path) => Some(path.triggered),
                _ => None,
            })
            .collect();
        assert_eq!(triggered, vec![true, true]);

        // One fired path is enough to persist the aggregate.
        let record = member.to_record();
        assert_eq!(record.as_object().unwrap().get("7"), Some(&json!(true)));
    }
}
