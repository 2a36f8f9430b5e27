//! Collection-wide invariants driven through multiple members sharing one
//! ledger and one census.

use party_core::{
    CurveTable, EvolutionLog, GameConfig, HeldItemData, HeldItemEffect, HoldEligibility,
    ItemDefinition, ItemKind, ItemLedger, ItemTable, MemberId, MemoryLedger, PartyEnv, PartyMember,
    PcgRng,
    RosterCensus, SilentNotifier, StaticProgress, StaticSettings,
};

fn band(name: &str) -> ItemDefinition {
    ItemDefinition::new(
        name,
        ItemKind::Held(HeldItemData::new(
            HeldItemEffect::AttackBoost { multiplier: 1.2 },
            HoldEligibility::Any,
        )),
    )
}

fn census_of(members: &[PartyMember]) -> RosterCensus {
    let mut census = RosterCensus::new();
    for member in members {
        if let Some(item) = member.held_item() {
            census.record(member.id(), &item.name);
        }
    }
    census
}

struct World {
    curves: CurveTable,
    items: ItemTable,
    settings: StaticSettings,
    progress: StaticProgress,
    rng: PcgRng,
    notifier: SilentNotifier,
    ledger: MemoryLedger,
    evolver: EvolutionLog,
}

impl World {
    fn new() -> Self {
        let mut curves = CurveTable::new();
        curves.insert("Sparkit", vec![0, 100, 250, 500]);
        Self {
            curves,
            items: ItemTable::new(),
            settings: StaticSettings::default(),
            progress: StaticProgress::default(),
            rng: PcgRng,
            notifier: SilentNotifier,
            ledger: MemoryLedger::new(),
            evolver: EvolutionLog::new(),
        }
    }
}

/// Rebuilds the census snapshot and runs one held-item request, the way a
/// collection store drives the protocol.
fn give(
    world: &mut World,
    members: &mut [PartyMember],
    index: usize,
    item: &ItemDefinition,
) -> Result<party_core::HeldItemChange, party_core::HeldItemError> {
    let census = census_of(members);
    let mut env = PartyEnv {
        species: &world.curves,
        items: &world.items,
        settings: &world.settings,
        progress: &world.progress,
        rng: &world.rng,
        census: &census,
        notifier: &world.notifier,
        ledger: &mut world.ledger,
        evolver: &mut world.evolver,
        game_seed: 1,
    };
    members[index].give_held_item(item, &mut env)
}

#[test]
fn uniqueness_and_the_holder_cap_survive_any_request_order() {
    let mut world = World::new();
    let mut members: Vec<PartyMember> = (0..8)
        .map(|n| PartyMember::new(MemberId(n), "Sparkit", 100, Vec::new()))
        .collect();

    // Two units each: equipping leaves stock behind, so a duplicate request
    // reaches the uniqueness check instead of failing on the ledger.
    let names: Vec<String> = (0..8).map(|n| format!("Band {n}")).collect();
    for name in &names {
        world.ledger.stock(name, 2);
    }

    // Six members equip six distinct items.
    for index in 0..GameConfig::MAX_ITEM_HOLDERS {
        assert!(give(&mut world, &mut members, index, &band(&names[index])).is_ok());
    }

    // A seventh holder is refused outright.
    assert!(matches!(
        give(&mut world, &mut members, 6, &band(&names[6])),
        Err(party_core::HeldItemError::HoldersFull { .. })
    ));

    // An item name already in use is refused no matter who asks.
    assert!(matches!(
        give(&mut world, &mut members, 7, &band(&names[0])),
        Err(party_core::HeldItemError::AlreadyInUse { .. })
    ));

    // Removing one frees a slot for another member.
    assert_eq!(
        give(&mut world, &mut members, 0, &band(&names[0])),
        Ok(party_core::HeldItemChange::Removed)
    );
    assert!(give(&mut world, &mut members, 6, &band(&names[6])).is_ok());

    let census = census_of(&members);
    assert!(party_core::PartyCensus::held_item_count(&census) <= GameConfig::MAX_ITEM_HOLDERS);

    let mut held: Vec<&str> = members
        .iter()
        .filter_map(|m| m.held_item().map(|i| i.name.as_str()))
        .collect();
    held.sort_unstable();
    held.dedup();
    assert_eq!(held.len(), GameConfig::MAX_ITEM_HOLDERS);
}

#[test]
fn members_share_the_protein_stock() {
    let mut world = World::new();
    world.ledger.stock(GameConfig::PROTEIN_ITEM, 6);
    let mut first = PartyMember::new(MemberId(0), "Sparkit", 100, Vec::new());
    let mut second = PartyMember::new(MemberId(1), "Sparkit", 100, Vec::new());

    let census = RosterCensus::new();
    let mut env = PartyEnv {
        species: &world.curves,
        items: &world.items,
        settings: &world.settings,
        progress: &world.progress,
        rng: &world.rng,
        census: &census,
        notifier: &world.notifier,
        ledger: &mut world.ledger,
        evolver: &mut world.evolver,
        game_seed: 1,
    };

    assert_eq!(first.use_protein(4, &mut env), Ok(4));
    // Only two units are left for the sibling; the clamp is silent.
    assert_eq!(second.use_protein(4, &mut env), Ok(2));
    assert_eq!(second.use_protein(4, &mut env), Ok(0));
    drop(env);

    assert_eq!(world.ledger.available(GameConfig::PROTEIN_ITEM), 0);
    assert_eq!(first.proteins_used() + second.proteins_used(), 6);
}
