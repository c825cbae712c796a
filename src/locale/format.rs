//! Generic time templates and their resolution into concrete patterns.
//!
//! A template names the fields a picker should show without fixing their
//! order or the clock style. Hour letters follow the usual pattern
//! conventions: `j` asks for the locale's preferred cycle, `h`/`K` force a
//! 12-hour clock and `H`/`k` force a 24-hour clock.

use serde::{Deserialize, Serialize};

use super::{HourCycle, LocaleService, PickerLocale};

/// The clock style requested by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockHourFormat {
    #[default]
    LocalePreferred,
    Twelve,
    TwentyFour,
}

impl ClockHourFormat {
    /// Returns the generic template for this clock style.
    pub fn template(self) -> &'static str {
        match self {
            ClockHourFormat::LocalePreferred => "jj:mm",
            ClockHourFormat::Twelve => "hh:mm",
            ClockHourFormat::TwentyFour => "HH:mm",
        }
    }
}

/// How the picker obtains its format string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSpec {
    /// A generic template resolved against the locale.
    Template(String),
    /// A concrete pattern used verbatim.
    Explicit(String),
    /// One of the predefined clock styles.
    Clock(ClockHourFormat),
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec::Clock(ClockHourFormat::default())
    }
}

impl From<ClockHourFormat> for FormatSpec {
    fn from(format: ClockHourFormat) -> Self {
        FormatSpec::Clock(format)
    }
}

/// Turns a [`FormatSpec`] into the concrete pattern the layout engine parses.
pub struct FormatResolver;

impl FormatResolver {
    /// Resolves `template` for `locale`, falling back to the template itself
    /// when the service cannot handle it.
    pub fn resolve(service: &dyn LocaleService, locale: &PickerLocale, template: &str) -> String {
        match service.date_format_pattern(template, locale) {
            Some(pattern) => {
                tracing::debug!("resolved template {:?} for {} to {:?}", template, locale, pattern);
                pattern
            }
            None => {
                tracing::warn!(
                    "template {:?} not resolvable for {}, using it literally",
                    template,
                    locale
                );
                template.to_string()
            }
        }
    }

    /// Resolves a full format specification.
    pub fn resolve_spec(service: &dyn LocaleService, locale: &PickerLocale, spec: &FormatSpec) -> String {
        match spec {
            FormatSpec::Explicit(pattern) => pattern.clone(),
            FormatSpec::Template(template) => Self::resolve(service, locale, template),
            FormatSpec::Clock(format) => Self::resolve(service, locale, format.template()),
        }
    }
}

/// The fields a template asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TemplateFields {
    /// `None` keeps the locale preference.
    pub hour: Option<Option<HourCycle>>,
    pub minute: bool,
}

/// Scans a template for hour and minute letters, skipping quoted literals.
pub(crate) fn analyze_template(template: &str) -> TemplateFields {
    let mut fields = TemplateFields {
        hour: None,
        minute: false,
    };
    let mut quoted = false;

    for c in template.chars() {
        if c == '\'' {
            quoted = !quoted;
            continue;
        }
        if quoted {
            continue;
        }
        match c {
            'j' if fields.hour.is_none() => fields.hour = Some(None),
            'h' | 'K' if fields.hour.is_none() => fields.hour = Some(Some(HourCycle::Twelve)),
            'H' | 'k' if fields.hour.is_none() => fields.hour = Some(Some(HourCycle::TwentyFour)),
            'm' => fields.minute = true,
            _ => {}
        }
    }

    fields
}

/// Removes the minute field and the separator in front of it.
pub(crate) fn strip_minutes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut quoted = false;

    for c in pattern.chars() {
        if c == '\'' {
            quoted = !quoted;
            out.push(c);
            continue;
        }
        if !quoted && c == 'm' {
            while out.ends_with(':') || out.ends_with('.') {
                out.pop();
            }
            continue;
        }
        out.push(c);
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_locale_preferred() {
        let fields = analyze_template("jj:mm");
        assert_eq!(fields.hour, Some(None));
        assert!(fields.minute);
    }

    #[test]
    fn test_analyze_skips_quoted_literals() {
        let fields = analyze_template("'hm' HH");
        assert_eq!(fields.hour, Some(Some(HourCycle::TwentyFour)));
        assert!(!fields.minute);
    }

    #[test]
    fn test_analyze_without_time_fields() {
        let fields = analyze_template("yyyy-MM-dd");
        assert_eq!(fields.hour, None);
        assert!(!fields.minute);
    }

    #[test]
    fn test_strip_minutes() {
        assert_eq!(strip_minutes("h:mm a"), "h a");
        assert_eq!(strip_minutes("HH:mm"), "HH");
        assert_eq!(strip_minutes("a h:mm"), "a h");
        assert_eq!(strip_minutes("H.mm"), "H");
    }

    #[test]
    fn test_clock_templates() {
        assert_eq!(ClockHourFormat::LocalePreferred.template(), "jj:mm");
        assert_eq!(ClockHourFormat::Twelve.template(), "hh:mm");
        assert_eq!(ClockHourFormat::TwentyFour.template(), "HH:mm");
    }
}
