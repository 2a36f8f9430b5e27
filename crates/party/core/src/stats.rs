//! Attack derivation.
//!
//! The cached attack on a member must always equal [`compute_attack`] over
//! its current fields; every setter that feeds the formula recomputes the
//! cache inline, so reads never observe a stale value.

use crate::config::GameConfig;

/// Derive the combat stat from its inputs.
///
/// ```text
/// attack = max(1, floor((base * (1 + pct/100) + flat) * level_factor * item_mult))
/// ```
///
/// `item_multiplier` is 1.0 unless the held item boosts attack. With
/// `ignore_level` the level factor drops out, which listings use to rank
/// members independently of training progress.
///
/// Pure and total: inputs are assumed pre-validated, the result is always
/// at least 1.
pub fn compute_attack(
    base: u32,
    percent_bonus: i32,
    flat_bonus: i32,
    level: u32,
    item_multiplier: f64,
    ignore_level: bool,
) -> u32 {
    let bonus_multiplier = 1.0 + f64::from(percent_bonus) / 100.0;
    let level_factor = if ignore_level {
        1.0
    } else {
        f64::from(level) / f64::from(GameConfig::LEVEL_SCALE)
    };
    let raw = (f64::from(base) * bonus_multiplier + f64::from(flat_bonus))
        * level_factor
        * item_multiplier;
    (raw.floor() as i64).max(1) as u32
}
