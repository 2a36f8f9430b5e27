//! Leveling-curve tables.
//!
//! Each growth rate expands into a cumulative experience table consumed by
//! the core's level scan: `curve[i]` is the total experience required to
//! advance past level `i`.

use party_core::GameConfig;

/// How fast a species levels.
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
pub enum GrowthRate {
    Fast,
    MediumFast,
    MediumSlow,
    Slow,
}

impl GrowthRate {
    pub const ALL: [GrowthRate; 4] = [
        GrowthRate::Fast,
        GrowthRate::MediumFast,
        GrowthRate::MediumSlow,
        GrowthRate::Slow,
    ];

    /// Total experience at which `level` is reached.
    ///
    /// The classic cubic growth formulas; level 1 is always reached at 0.
    pub fn cumulative_exp(self, level: u32) -> u64 {
        if level <= 1 {
            return 0;
        }
        let n = f64::from(level);
        let total = match self {
            GrowthRate::Fast => 0.8 * n.powi(3),
            GrowthRate::MediumFast => n.powi(3),
            GrowthRate::MediumSlow => 1.2 * n.powi(3) - 15.0 * n.powi(2) + 100.0 * n - 140.0,
            GrowthRate::Slow => 1.25 * n.powi(3),
        };
        total.max(0.0) as u64
    }

    /// Expand into the cumulative threshold table the core scans.
    ///
    /// The table carries one threshold past the level cap so the scan can
    /// land on the cap itself; past it, experience keeps accruing with no
    /// further level change.
    pub fn curve(self) -> Vec<u64> {
        (0..=GameConfig::MAX_LEVEL)
            .map(|level| self.cumulative_exp(level + 1))
            .collect()
    }
}
