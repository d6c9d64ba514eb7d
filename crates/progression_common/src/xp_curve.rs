//! XP curve evaluator.
//!
//! Maps a skill level to the total XP required to reach it:
//!
//! ```text
//! xp(L) = round( (L² − L + 600 · (2^(L/7) − 2^(1/7)) / (2^(1/7) − 1)) / 8 )
//! ```
//!
//! Rounding is half-to-even. Regenerated tables must stay bit-identical to
//! the reference table, so the rule must not change.

/// Highest level of the shipped XP curve
pub const DEFAULT_MAX_LEVEL: u32 = 99;

/// Total XP required to reach `level`.
///
/// Only defined for `level >= 1`; the table builder never passes anything else.
pub fn xp_for_level(level: u32) -> u64 {
    raw_xp(level).round_ties_even() as u64
}

/// Like [`xp_for_level`], but `None` once the curve no longer fits in a `u64`.
pub fn checked_xp_for_level(level: u32) -> Option<u64> {
    let rounded = raw_xp(level).round_ties_even();
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if rounded.is_finite() && rounded >= 0.0 && rounded < u64::MAX as f64 {
        Some(rounded as u64)
    } else {
        None
    }
}

/// Unrounded curve value, exposed for diagnostics
pub fn raw_xp(level: u32) -> f64 {
    let l = f64::from(level);
    let base = 2f64.powf(1.0 / 7.0);
    let growth = (2f64.powf(l / 7.0) - base) / (base - 1.0);
    (1.0 / 8.0) * (l * l - l + 600.0 * growth)
}
