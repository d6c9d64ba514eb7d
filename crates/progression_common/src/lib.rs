//! Shared types and logic for progression table generation.
//!
//! - `xp_curve` / `xp_table`: skill XP curve, cumulative table, level lookup
//! - `fishing`: catch-time bounds and XP reward per fishing level
//! - `export`: JSON and CSV writers with atomic replacement
//! - `config`: TOML configuration for levels, step and output paths

pub mod config;
pub mod error;
pub mod export;
pub mod fishing;
pub mod xp_curve;
pub mod xp_table;

pub use config::{FishingConfig, GeneratorConfig, XpCurveConfig};
pub use error::{ProgressionError, Result};
pub use export::{render_fishing_csv, render_xp_json, write_fishing_csv, write_xp_json};
pub use fishing::{build_fishing_table, FishingRow};
pub use xp_curve::xp_for_level;
pub use xp_table::{build_xp_table, LevelProgress, XpEntry, XpRow, XpTable};
