//! Persistence of the demo's picker choices.
//!
//! The locale and clock style picked in the window are stored in eframe's
//! persistent storage as JSON strings and restored on the next start.

use serde::{Deserialize, Serialize};
use timewheel::{ClockHourFormat, FormatSpec, PickerConfig};

const PICKER_SETTINGS_KEY: &str = "picker_settings";

/// Choices made in the demo window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSettings {
    pub locale: String,
    pub clock: ClockHourFormat,
}

impl PickerSettings {
    /// Captures the choices present in `config`. Formats other than a clock
    /// style are not remembered.
    pub fn from_config(config: &PickerConfig) -> Self {
        let clock = match &config.format {
            FormatSpec::Clock(clock) => *clock,
            _ => ClockHourFormat::default(),
        };
        Self {
            locale: config.locale.clone(),
            clock,
        }
    }

    /// Overrides the locale and format of `config`.
    pub fn apply_to(&self, config: &mut PickerConfig) {
        config.locale = self.locale.clone();
        config.format = FormatSpec::Clock(self.clock);
    }

    /// Loads the stored settings, if any were saved and still parse.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Option<Self> {
        let json_str = storage?.get_string(PICKER_SETTINGS_KEY)?;
        match serde_json::from_str(&json_str) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!("ignoring stored picker settings: {}", err);
                None
            }
        }
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        if let Ok(json_str) = serde_json::to_string(self) {
            storage.set_string(PICKER_SETTINGS_KEY, json_str);
            storage.flush();
        }
    }
}
