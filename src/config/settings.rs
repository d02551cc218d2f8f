//! User settings for the expense tracker
//!
//! Manages preferences: suggested categories, whether the category list is
//! enforced, the default log filter and the UI tick rate.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::services::CategoryPolicy;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Categories offered in the form
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Only accept categories from `categories`
    #[serde(default)]
    pub restrict_categories: bool,

    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// How often the UI wakes up without input, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    ["food", "travel", "bills", "entertainment", "other"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
            restrict_categories: false,
            log_filter: default_log_filter(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// The category policy new transactions are checked against
    pub fn category_policy(&self) -> CategoryPolicy {
        if self.restrict_categories {
            CategoryPolicy::OneOf(self.categories.clone())
        } else {
            CategoryPolicy::Any
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
