//! Generator configuration.
//!
//! Replaces the hard-coded constants (max levels, step, output paths) with
//! values read from `progression.toml`. Every field is optional; missing
//! fields fall back to the shipped defaults.
//!
//! ```toml
//! [xp]
//! max_level = 99
//! output = "utility/xp_data.json"
//!
//! [fishing]
//! max_level = 100
//! step = 10
//! output = "utility/catch_times_and_xp.csv"
//! ```

use crate::{fishing, xp_curve};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "progression.toml";

/// XP curve generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpCurveConfig {
    #[serde(default = "default_xp_max_level")]
    pub max_level: u32,

    #[serde(default = "default_xp_output")]
    pub output: PathBuf,
}

impl Default for XpCurveConfig {
    fn default() -> Self {
        Self {
            max_level: default_xp_max_level(),
            output: default_xp_output(),
        }
    }
}

/// Fishing table generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishingConfig {
    #[serde(default = "default_fishing_max_level")]
    pub max_level: u32,

    #[serde(default = "default_fishing_step")]
    pub step: u32,

    #[serde(default = "default_fishing_output")]
    pub output: PathBuf,
}

impl Default for FishingConfig {
    fn default() -> Self {
        Self {
            max_level: default_fishing_max_level(),
            step: default_fishing_step(),
            output: default_fishing_output(),
        }
    }
}

/// Main generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub xp: XpCurveConfig,

    #[serde(default)]
    pub fishing: FishingConfig,
}

fn default_xp_max_level() -> u32 {
    xp_curve::DEFAULT_MAX_LEVEL
}

fn default_xp_output() -> PathBuf {
    PathBuf::from("utility/xp_data.json")
}

fn default_fishing_max_level() -> u32 {
    fishing::DEFAULT_MAX_LEVEL
}

fn default_fishing_step() -> u32 {
    fishing::DEFAULT_STEP
}

fn default_fishing_output() -> PathBuf {
    PathBuf::from("utility/catch_times_and_xp.csv")
}

impl GeneratorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse generator configuration")
    }

    /// Read a config file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: GeneratorConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (error if missing)
    /// 2. ./progression.toml
    /// 3. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        Ok(Self::default())
    }

    /// Serialize back to TOML, e.g. to seed a config file
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
