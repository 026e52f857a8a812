//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the listing store location
const STORE_PATH_ENV: &str = "LISTING_TUI_STORE";

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_CUSTOM_HOURS_OPTION: &str = "custom";
const DEFAULT_DIFFICULTY_KEY: &str = "difficulty";

/// A selectable option of a filter taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
}

impl FilterOption {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// ISO 4217 currency code used for listing prices
    pub currency: Option<String>,
    /// Minimum listing price in currency subunits (0 disables the check)
    pub listing_minimum_price_subunits: Option<i64>,
    /// Value of the hours option that reveals the custom hours input
    pub custom_hours_option: Option<String>,
    /// Field name of the difficulty taxonomy
    pub difficulty_key: Option<String>,
    /// Difficulty taxonomy options
    pub difficulty_options: Option<Vec<FilterOption>>,
    /// Listing store location
    pub store_path: Option<PathBuf>,
    /// Message catalog overrides
    pub messages_path: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "listing-tui", "listing-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory holding the store and the log file
    pub fn data_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve the store path: env var, then config, then the data dir
    pub fn resolved_store_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var(STORE_PATH_ENV) {
            return PathBuf::from(path);
        }
        self.store_path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("store.json"))
    }

    /// Build the marketplace settings consumed by the forms
    pub fn marketplace(&self) -> MarketplaceConfig {
        MarketplaceConfig {
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            listing_minimum_price_subunits: self
                .listing_minimum_price_subunits
                .unwrap_or(0)
                .max(0),
            custom_hours_option: self
                .custom_hours_option
                .clone()
                .unwrap_or_else(|| DEFAULT_CUSTOM_HOURS_OPTION.to_string()),
            difficulty_key: self
                .difficulty_key
                .clone()
                .unwrap_or_else(|| DEFAULT_DIFFICULTY_KEY.to_string()),
            difficulty_options: self
                .difficulty_options
                .clone()
                .unwrap_or_else(default_difficulty_options),
        }
    }
}

fn default_difficulty_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("beginner", "Beginner"),
        FilterOption::new("intermediate", "Intermediate"),
        FilterOption::new("advanced", "Advanced"),
    ]
}

/// Marketplace settings with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceConfig {
    pub currency: String,
    pub listing_minimum_price_subunits: i64,
    pub custom_hours_option: String,
    pub difficulty_key: String,
    pub difficulty_options: Vec<FilterOption>,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        TuiConfig::default().marketplace()
    }
}
