//! Panel options.
//!
//! Options are layered: built-in defaults, then an optional TOML file, then
//! `STATUSBOARD_*` environment variables, then command-line flags.
//!
//! ```toml
//! display_mode = "grid"
//! display_level = "minimal"
//! max_items = 12
//! custom_names = '{"https://google.com":"Google"}'
//! ```
//!
//! Only `custom_names` influences parsing; everything else shapes the view.

use std::path::Path;
use std::str::FromStr;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use statusboard_types::ServiceStatus;

/// Bounds for `max_items`.
pub const MAX_ITEMS_RANGE: (usize, usize) = (1, 100);

/// Bounds for `refresh_interval`, in seconds.
pub const REFRESH_INTERVAL_RANGE: (u64, u64) = (5, 300);

/// Errors loading or validating options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The configuration sources could not be read or merged.
    #[error("Failed to load options: {0}")]
    Config(#[from] config::ConfigError),

    /// A numeric option is outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// How records are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One card per row.
    #[default]
    List,
    /// Cards in columns.
    Grid,
    /// One status glyph per service.
    Compact,
}

impl DisplayMode {
    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::List => DisplayMode::Grid,
            DisplayMode::Grid => DisplayMode::Compact,
            DisplayMode::Compact => DisplayMode::List,
        }
    }

    /// Returns the display label for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::List => "List",
            DisplayMode::Grid => "Grid",
            DisplayMode::Compact => "Compact",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(DisplayMode::List),
            "grid" => Ok(DisplayMode::Grid),
            "compact" => Ok(DisplayMode::Compact),
            other => Err(format!("unknown display mode '{}' (list, grid, compact)", other)),
        }
    }
}

/// How much of each card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLevel {
    /// Header and heartbeat bar only.
    Minimal,
    /// Header, heartbeat bar and stats.
    #[default]
    Full,
}

impl DisplayLevel {
    /// Switch between minimal and full.
    pub fn toggle(self) -> Self {
        match self {
            DisplayLevel::Minimal => DisplayLevel::Full,
            DisplayLevel::Full => DisplayLevel::Minimal,
        }
    }
}

impl FromStr for DisplayLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(DisplayLevel::Minimal),
            "full" => Ok(DisplayLevel::Full),
            other => Err(format!("unknown display level '{}' (minimal, full)", other)),
        }
    }
}

/// Options controlling the status panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    #[serde(alias = "displayMode")]
    pub display_mode: DisplayMode,
    #[serde(alias = "displayLevel")]
    pub display_level: DisplayLevel,
    #[serde(alias = "showLabels")]
    pub show_labels: bool,
    #[serde(alias = "showLastCheck")]
    pub show_last_check: bool,
    #[serde(alias = "showResponseTime")]
    pub show_response_time: bool,
    #[serde(alias = "showUrls")]
    pub show_urls: bool,
    /// Maximum number of records displayed.
    #[serde(alias = "maxItems")]
    pub max_items: usize,
    /// Seconds between data refreshes.
    #[serde(alias = "refreshInterval")]
    pub refresh_interval: u64,
    /// JSON object mapping instance identifiers to display names.
    #[serde(alias = "customNames")]
    pub custom_names: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::List,
            display_level: DisplayLevel::Full,
            show_labels: true,
            show_last_check: true,
            show_response_time: true,
            show_urls: true,
            max_items: 20,
            refresh_interval: 30,
            custom_names: "{}".to_string(),
        }
    }
}

/// `STATUSBOARD_*` environment variables, e.g. `STATUSBOARD_MAX_ITEMS=12`.
fn env_layer() -> Environment {
    Environment::with_prefix("STATUSBOARD").try_parsing(true)
}

impl PanelOptions {
    /// Load options from an optional TOML file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, OptionsError> {
        Self::load_with(path, |_| {})
    }

    /// Load options, apply `overrides` (command-line flags) on top, then
    /// validate the merged result.
    pub fn load_with<F>(path: Option<&Path>, overrides: F) -> Result<Self, OptionsError>
    where
        F: FnOnce(&mut PanelOptions),
    {
        Self::load_layers(path, env_layer(), overrides)
    }

    fn load_layers<F>(path: Option<&Path>, env: Environment, overrides: F) -> Result<Self, OptionsError>
    where
        F: FnOnce(&mut PanelOptions),
    {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder.add_source(env).build()?;

        let mut options: PanelOptions = config.try_deserialize()?;
        overrides(&mut options);
        options.validate()?;
        Ok(options)
    }

    /// Check numeric options against their allowed ranges.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let (min, max) = MAX_ITEMS_RANGE;
        if !(min..=max).contains(&self.max_items) {
            return Err(OptionsError::OutOfRange {
                field: "max_items",
                value: self.max_items as u64,
                min: min as u64,
                max: max as u64,
            });
        }

        let (min, max) = REFRESH_INTERVAL_RANGE;
        if !(min..=max).contains(&self.refresh_interval) {
            return Err(OptionsError::OutOfRange {
                field: "refresh_interval",
                value: self.refresh_interval,
                min,
                max,
            });
        }

        Ok(())
    }

    /// The custom names JSON, if any was configured.
    pub fn custom_names(&self) -> Option<&str> {
        Some(self.custom_names.as_str()).filter(|s| !s.trim().is_empty())
    }

    /// The records that fit within `max_items`.
    pub fn limit<'a>(&self, services: &'a [ServiceStatus]) -> &'a [ServiceStatus] {
        &services[..services.len().min(self.max_items)]
    }
}
