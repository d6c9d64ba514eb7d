//! Fishing activity table.
//!
//! Catch-time bounds and XP reward per fishing level. Every value uses the
//! half-adjust-then-floor form `floor(x + 0.5)`, never `f64::round`, so the
//! table matches the reference values exactly.

use crate::error::{ProgressionError, Result};
use tracing::info;

pub const DEFAULT_MAX_LEVEL: u32 = 100;
pub const DEFAULT_STEP: u32 = 10;

/// One exported fishing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishingRow {
    pub level: u32,
    pub min_catch_time: u32,
    pub max_catch_time: u32,
    pub xp: u64,
}

impl FishingRow {
    pub fn for_level(level: u32) -> Self {
        Self {
            level,
            min_catch_time: min_catch_time(level),
            max_catch_time: max_catch_time(level),
            xp: fishing_xp(level),
        }
    }
}

/// `floor(3 + L/20 + 0.5)`
pub fn min_catch_time(level: u32) -> u32 {
    let l = f64::from(level);
    (3.0 + l / 20.0 + 0.5).floor() as u32
}

/// `floor(6 + L/9 + 0.5)`
pub fn max_catch_time(level: u32) -> u32 {
    let l = f64::from(level);
    (6.0 + l / 9.0 + 0.5).floor() as u32
}

/// `5 + 5 * floor((2L + L²/15) / 5 + 0.5)`, i.e. XP snapped to a multiple of 5
pub fn fishing_xp(level: u32) -> u64 {
    let l = f64::from(level);
    let steps = ((l * 2.0 + l * l / 15.0) / 5.0 + 0.5).floor() as u64;
    5 + 5 * steps
}

/// Rows for levels `0, step, 2*step, ...` up to and including `max_level`.
pub fn build_fishing_table(max_level: u32, step: u32) -> Result<Vec<FishingRow>> {
    if step == 0 {
        return Err(ProgressionError::InvalidStep);
    }

    let rows: Vec<FishingRow> = (0..=max_level)
        .step_by(step as usize)
        .map(FishingRow::for_level)
        .collect();

    info!(
        "Built fishing table: {} rows (max level {}, step {})",
        rows.len(),
        max_level,
        step
    );
    Ok(rows)
}
