//! XP table builder and level lookup.
//!
//! Builds the cumulative XP table from the curve evaluator and answers
//! "which level is this much XP" for the character sheet.

use crate::error::{ProgressionError, Result};
use crate::xp_curve::checked_xp_for_level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::ops::Bound::{Excluded, Unbounded};
use std::path::Path;
use tracing::{debug, info};

/// A single computed row of the XP curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpRow {
    pub level: u32,
    pub total_xp: u64,
    pub difference: u64,
}

/// Persisted value for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpEntry {
    pub total_xp: u64,
    pub difference: u64,
}

/// Level-keyed XP table, always iterated in ascending level order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct XpTable {
    entries: BTreeMap<u32, XpEntry>,
}

/// Where a given XP amount sits on the curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: u32,
    /// XP earned inside the current level
    pub current_xp: u64,
    /// XP span of the current level, 0 at the top of the table
    pub max_xp: u64,
    pub progress_percent: f64,
}

/// Build the XP table for levels `1..=max_level`.
///
/// `observer` sees every row as soon as it is computed, in level order.
pub fn build_xp_table<F>(max_level: u32, mut observer: F) -> Result<XpTable>
where
    F: FnMut(&XpRow),
{
    if max_level == 0 {
        return Err(ProgressionError::InvalidLevelRange(
            "XP curve needs a max level of at least 1".to_string(),
        ));
    }

    // The curve is increasing, so the top level is the first to overflow
    if checked_xp_for_level(max_level).is_none() {
        return Err(out_of_range(max_level));
    }

    let mut entries = BTreeMap::new();
    let mut total_xp: u64 = 0;

    for level in 1..=max_level {
        let xp_required = checked_xp_for_level(level).ok_or_else(|| out_of_range(level))?;
        let difference = xp_required.saturating_sub(total_xp);
        total_xp = xp_required;

        let row = XpRow {
            level,
            total_xp,
            difference,
        };
        observer(&row);
        entries.insert(
            level,
            XpEntry {
                total_xp,
                difference,
            },
        );
    }

    info!("Built XP table: {} levels, top total {}", entries.len(), total_xp);
    Ok(XpTable { entries })
}

fn out_of_range(level: u32) -> ProgressionError {
    ProgressionError::InvalidLevelRange(format!(
        "XP for level {} does not fit in a 64-bit total",
        level
    ))
}

impl XpTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, level: u32) -> Option<&XpEntry> {
        self.entries.get(&level)
    }

    pub fn max_level(&self) -> Option<u32> {
        self.entries.keys().next_back().copied()
    }

    /// Rows in ascending level order
    pub fn rows(&self) -> impl Iterator<Item = XpRow> + '_ {
        self.entries.iter().map(|(level, entry)| XpRow {
            level: *level,
            total_xp: entry.total_xp,
            difference: entry.difference,
        })
    }

    /// Parse a previously exported table.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, XpEntry> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();

        for (key, entry) in raw {
            let level: u32 = key.trim().parse().map_err(|_| {
                ProgressionError::TableFormat(format!("non-numeric level key {:?}", key))
            })?;
            if entries.insert(level, entry).is_some() {
                return Err(ProgressionError::TableFormat(format!(
                    "duplicate level {}",
                    level
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Load a previously exported table from disk.
    pub fn load_json(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        debug!("Loaded {} XP levels from {}", table.len(), path.display());
        Ok(table)
    }

    /// Resolve total XP into a level and progress through it.
    pub fn level_for_xp(&self, xp: u64) -> LevelProgress {
        let mut progress = LevelProgress {
            level: 1,
            current_xp: 0,
            max_xp: 0,
            progress_percent: 0.0,
        };

        // Highest level already reached
        let Some((&level, entry)) = self.entries.iter().rev().find(|(_, e)| e.total_xp <= xp)
        else {
            return progress;
        };

        progress.level = level;
        progress.current_xp = xp - entry.total_xp;

        match self.entries.range((Excluded(level), Unbounded)).next() {
            Some((_, next)) => {
                progress.max_xp = next.total_xp.saturating_sub(entry.total_xp);
                progress.progress_percent = if progress.max_xp > 0 {
                    progress.current_xp as f64 / progress.max_xp as f64 * 100.0
                } else {
                    100.0
                };
            }
            None => {
                progress.progress_percent = 100.0;
            }
        }

        progress
    }
}
