//! Picker configuration.
//!
//! Configuration is limited to the locale, the format, the initial time, the
//! scroll mode and the default wheel metrics. It is read from JSON:
//!
//! ```json
//! {
//!   "locale": "en-GB",
//!   "format": { "clock": "locale_preferred" },
//!   "initial_time": "07:30:00",
//!   "scroll_mode": "infinite"
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::ScrollMode;
use crate::error::{PickerError, Result};
use crate::locale::{FormatSpec, PickerLocale};

/// Width of a wheel when nobody overrides it.
pub const DEFAULT_COMPONENT_WIDTH: f64 = 80.0;
/// Row height of a wheel when nobody overrides it.
pub const DEFAULT_ITEM_HEIGHT: f64 = 44.0;
/// Width of the gap between two wheels when a spacer has no width.
pub const DEFAULT_SPACER_WIDTH: f64 = 10.0;

/// Fallback metrics used when the observer declines to answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerMetrics {
    pub component_width: f64,
    pub item_height: f64,
    /// `None` keeps each unit's own default.
    pub scroll_mode: Option<ScrollMode>,
}

impl Default for PickerMetrics {
    fn default() -> Self {
        Self {
            component_width: DEFAULT_COMPONENT_WIDTH,
            item_height: DEFAULT_ITEM_HEIGHT,
            scroll_mode: None,
        }
    }
}

/// Serializable picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// BCP-47 locale identifier
    pub locale: String,
    pub format: FormatSpec,
    /// Hour and minute applied on top of the host's time value
    pub initial_time: Option<NaiveTime>,
    pub scroll_mode: Option<ScrollMode>,
    pub row_height: Option<f64>,
    pub component_width: Option<f64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            format: FormatSpec::default(),
            initial_time: None,
            scroll_mode: None,
            row_height: None,
            component_width: None,
        }
    }
}

impl PickerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PickerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!("loaded picker config from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/timewheel/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("timewheel").join("config.json"))
    }

    /// Loads `path` if it exists, otherwise (or on error) the default config.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path.exists() => Self::load(path).unwrap_or_else(|err| {
                tracing::warn!("{}, using default config", err);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn locale(&self) -> PickerLocale {
        PickerLocale::parse(&self.locale)
    }

    pub fn metrics(&self) -> PickerMetrics {
        PickerMetrics {
            component_width: self.component_width.unwrap_or(DEFAULT_COMPONENT_WIDTH),
            item_height: self.row_height.unwrap_or(DEFAULT_ITEM_HEIGHT),
            scroll_mode: self.scroll_mode,
        }
    }
}
