//! Engine configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An override file (explicit path, or ~/.local/share/bidlens/config/engine.toml)
//! 2. Embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their built-in values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analytics::MAX_MONTHS;
use crate::error::{Error, Result};
use crate::models::Timeframe;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/engine.toml");

/// Constant figures reported by the performance endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderMetrics {
    /// Days
    pub average_response_time: f64,
    pub competitive_index: f64,
    /// Percent
    pub average_markup: f64,
}

impl Default for PlaceholderMetrics {
    fn default() -> Self {
        Self {
            average_response_time: 2.5,
            competitive_index: 8.5,
            average_markup: 15.0,
        }
    }
}

/// Values used when a request leaves a parameter out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestDefaults {
    pub months: u32,
    pub timeframe: Timeframe,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            months: 6,
            timeframe: Timeframe::Month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub placeholders: PlaceholderMetrics,
    pub defaults: RequestDefaults,
}

impl EngineConfig {
    /// Load from `override_path`, the default override location, or the
    /// embedded defaults, in that order
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        load_config(override_path)
    }

    /// Parse a TOML document on top of the built-in defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("bidlens").join("config").join("engine.toml"))
}

/// Load configuration (override first, then default)
///
/// An explicit path that does not exist is an error; a missing file at the
/// default location is not.
fn load_config(override_path: Option<&Path>) -> Result<EngineConfig> {
    let content = match override_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "Loading engine config");
            read_config(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading engine config override");
                read_config(&path)?
            }
            _ => DEFAULT_CONFIG.to_string(),
        },
    };

    parse_config(&content)
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config {}: {}", path.display(), e))
    })
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    placeholders: Option<RawPlaceholders>,
    defaults: Option<RawDefaults>,
}

#[derive(Debug, Deserialize)]
struct RawPlaceholders {
    average_response_time: Option<f64>,
    competitive_index: Option<f64>,
    average_markup: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    months: Option<u32>,
    timeframe: Option<String>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = EngineConfig::default();

    if let Some(placeholders) = raw.placeholders {
        if let Some(value) = placeholders.average_response_time {
            config.placeholders.average_response_time = value;
        }
        if let Some(value) = placeholders.competitive_index {
            config.placeholders.competitive_index = value;
        }
        if let Some(value) = placeholders.average_markup {
            config.placeholders.average_markup = value;
        }
    }

    if let Some(defaults) = raw.defaults {
        if let Some(months) = defaults.months {
            if months == 0 || months > MAX_MONTHS {
                return Err(Error::Config(format!(
                    "defaults.months must be between 1 and {}",
                    MAX_MONTHS
                )));
            }
            config.defaults.months = months;
        }
        if let Some(timeframe) = defaults.timeframe {
            config.defaults.timeframe = timeframe.parse().map_err(Error::Config)?;
        }
    }

    Ok(config)
}
