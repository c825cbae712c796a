//! Locale handling for the picker.
//!
//! This module contains everything that depends on the user's locale:
//! - Locale identifiers and their hour-cycle keyword (`PickerLocale`)
//! - The locale service consumed by the picker (`LocaleService`)
//! - A built-in service backed by an embedded locale table (`BuiltinLocales`)
//! - Generic template resolution with literal fallback (`FormatResolver`)

mod builtin;
mod format;

pub use builtin::BuiltinLocales;
pub use format::{ClockHourFormat, FormatResolver, FormatSpec};

pub(crate) use format::{analyze_template, strip_minutes};

use icu::locale::extensions::unicode::Key;
use icu::locale::Locale as IcuLocale;
use serde::{Deserialize, Serialize};

/// Whether a clock counts hours 1-12 with a day period or 0-23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourCycle {
    Twelve,
    TwentyFour,
}

/// A parsed locale identifier.
///
/// Parsing never fails: a malformed identifier is logged and replaced by the
/// root locale, which lays out as a plain 24-hour clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLocale {
    inner: IcuLocale,
}

impl PickerLocale {
    /// Parses a BCP-47 identifier such as `en-US` or `de-DE-u-hc-h12`.
    pub fn parse(tag: &str) -> Self {
        match tag.parse::<IcuLocale>() {
            Ok(inner) => Self { inner },
            Err(err) => {
                tracing::warn!("unparseable locale {:?} ({:?}), using root locale", tag, err);
                Self::root()
            }
        }
    }

    /// The root (`und`) locale.
    pub fn root() -> Self {
        Self {
            inner: IcuLocale::UNKNOWN,
        }
    }

    /// Returns the language subtag, e.g. `en`.
    pub fn language(&self) -> String {
        self.inner.id.language.to_string()
    }

    /// Returns the region subtag, e.g. `GB`, if present.
    pub fn region(&self) -> Option<String> {
        self.inner.id.region.map(|r| r.to_string())
    }

    /// Returns the hour cycle requested through the `-u-hc-` keyword, if any.
    pub fn hour_cycle_override(&self) -> Option<HourCycle> {
        let key: Key = "hc".parse().ok()?;
        let value = self.inner.extensions.unicode.keywords.get(&key)?.to_string();
        match value.as_str() {
            "h11" | "h12" => Some(HourCycle::Twelve),
            "h23" | "h24" => Some(HourCycle::TwentyFour),
            _ => None,
        }
    }
}

impl Default for PickerLocale {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for PickerLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Locale-dependent data the picker needs from its host platform.
pub trait LocaleService {
    /// Resolves a generic field template (e.g. `jj:mm`) into a concrete
    /// pattern for `locale`, or `None` when the template is not supported.
    fn date_format_pattern(&self, template: &str, locale: &PickerLocale) -> Option<String>;

    /// Returns the (AM, PM) day-period symbols for `locale`.
    fn am_pm_symbols(&self, locale: &PickerLocale) -> (String, String);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_and_region() {
        let locale = PickerLocale::parse("en-GB");
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region().as_deref(), Some("GB"));
        assert_eq!(locale.hour_cycle_override(), None);
    }

    #[test]
    fn test_hour_cycle_keyword() {
        assert_eq!(
            PickerLocale::parse("de-DE-u-hc-h12").hour_cycle_override(),
            Some(HourCycle::Twelve)
        );
        assert_eq!(
            PickerLocale::parse("en-US-u-hc-h23").hour_cycle_override(),
            Some(HourCycle::TwentyFour)
        );
    }

    #[test]
    fn test_malformed_falls_back_to_root() {
        let locale = PickerLocale::parse("not a locale!!");
        assert_eq!(locale, PickerLocale::root());
        assert_eq!(locale.language(), "und");
    }
}
