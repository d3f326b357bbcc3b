//! # Diary Configuration
//!
//! Start-up settings for the diary screens, read from a single YAML file.
//!
//! ## YAML Format
//!
//! ```yaml
//! daily_goals:
//!   calories: 1870
//!   carbs: 209
//!   fat: 58
//!   protein: 84
//!   sodium: 2300
//!   sugar: 63
//! seed_sample_entry: true
//! lifestyle_next_route: "/health/forms/Wellness"
//! ```
//!
//! Every key is optional and falls back to the defaults above. A missing file
//! is not an error: the defaults are used. Goals stay fixed for the lifetime
//! of the process once loaded.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{DailyGoals, Nutrient};

use crate::domain::lifestyle::DEFAULT_NEXT_ROUTE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryConfig {
    /// Per-nutrient daily targets
    pub daily_goals: DailyGoals,
    /// Whether today's log starts with the sample breakfast entry
    pub seed_sample_entry: bool,
    /// Route the standalone lifestyle form moves to after a valid submit
    pub lifestyle_next_route: String,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            daily_goals: DailyGoals::default(),
            seed_sample_entry: true,
            lifestyle_next_route: DEFAULT_NEXT_ROUTE.to_string(),
        }
    }
}

impl DiaryConfig {
    /// Load from `path`, or return defaults if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("Loaded diary config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes as null, which means "all defaults"
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse diary config YAML")?
        };
        config.validate()?;
        debug!("Diary config: {:?}", config);
        Ok(config)
    }

    /// Goals must be positive so progress fractions are defined
    pub fn validate(&self) -> Result<()> {
        for nutrient in Nutrient::all() {
            if self.daily_goals.get(nutrient) == 0 {
                bail!("Daily goal for {} must be greater than 0", nutrient.label());
            }
        }
        if self.lifestyle_next_route.trim().is_empty() {
            bail!("lifestyle_next_route cannot be empty");
        }
        Ok(())
    }
}
