//! User settings for Budget Planner
//!
//! Manages display preferences such as the currency symbol, the date format
//! and which tab the terminal UI opens on.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// The top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Transactions,
    Budgets,
    Savings,
    Reports,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Transactions,
        Tab::Budgets,
        Tab::Savings,
        Tab::Reports,
    ];

    /// Position of this tab in [`Tab::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab after this one, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab before this one, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Budgets => "Budgets",
            Self::Savings => "Savings",
            Self::Reports => "Reports",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{}'", s))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// User settings for Budget Planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Tab shown when the terminal UI starts
    #[serde(default)]
    pub default_tab: Tab,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Whether chrono can render dates with `format`
///
/// Rendering a pattern with an unknown specifier panics, so patterns from
/// the settings file are checked before use.
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_tab: Tab::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            // Formats chrono cannot render fall back to the default
            if !is_valid_date_format(&settings.date_format) {
                warn!(
                    format = %settings.date_format,
                    "invalid date format in settings, using default"
                );
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Change the date format, rejecting patterns chrono cannot render
    pub fn set_date_format(&mut self, format: &str) -> Result<(), BudgetError> {
        if !is_valid_date_format(format) {
            return Err(BudgetError::Config(format!("Invalid date format: {}", format)));
        }
        self.date_format = format.to_string();
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
