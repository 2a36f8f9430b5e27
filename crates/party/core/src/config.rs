/// Rule constants shared by every component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Collection-wide cap on members holding an item at the same time.
    pub const MAX_ITEM_HOLDERS: usize = 6;

    /// Protein uses granted per region reached. The starting region counts,
    /// so the ceiling is `(highest_region + 1) * PROTEIN_USES_PER_REGION`.
    pub const PROTEIN_USES_PER_REGION: u32 = 5;

    /// Divisor applied to the level factor in the attack formula.
    pub const LEVEL_SCALE: u32 = 100;

    /// Highest level any leveling curve defines.
    pub const MAX_LEVEL: u32 = 100;

    /// Ledger name of the protein resource item.
    pub const PROTEIN_ITEM: &'static str = "Protein";
}
