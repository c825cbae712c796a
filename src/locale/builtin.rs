//! Embedded locale data.
//!
//! Covers the hour-cycle preference, time patterns and day-period symbols of
//! common locales. Lookups go from language-region to language to root.

use super::{analyze_template, strip_minutes, HourCycle, LocaleService, PickerLocale};

struct LocaleData {
    tag: &'static str,
    hour_cycle: HourCycle,
    twelve_hour: &'static str,
    twenty_four_hour: &'static str,
    am: &'static str,
    pm: &'static str,
}

const fn entry(
    tag: &'static str,
    hour_cycle: HourCycle,
    twelve_hour: &'static str,
    twenty_four_hour: &'static str,
    am: &'static str,
    pm: &'static str,
) -> LocaleData {
    LocaleData {
        tag,
        hour_cycle,
        twelve_hour,
        twenty_four_hour,
        am,
        pm,
    }
}

use super::HourCycle::{Twelve as H12, TwentyFour as H24};

const ROOT: LocaleData = entry("und", H24, "h:mm a", "HH:mm", "AM", "PM");

static LOCALE_TABLE: &[LocaleData] = &[
    entry("en", H12, "h:mm a", "HH:mm", "AM", "PM"),
    entry("en-GB", H24, "h:mm a", "HH:mm", "am", "pm"),
    entry("en-IE", H24, "h:mm a", "HH:mm", "a.m.", "p.m."),
    entry("en-IN", H12, "h:mm a", "HH:mm", "am", "pm"),
    entry("en-AU", H12, "h:mm a", "HH:mm", "am", "pm"),
    entry("de", H24, "h:mm a", "HH:mm", "AM", "PM"),
    entry("fr", H24, "h:mm a", "HH:mm", "AM", "PM"),
    entry("fr-CA", H24, "h:mm a", "HH:mm", "a.m.", "p.m."),
    entry("es", H24, "h:mm a", "H:mm", "a. m.", "p. m."),
    entry("es-US", H12, "h:mm a", "HH:mm", "a. m.", "p. m."),
    entry("it", H24, "h:mm a", "HH:mm", "AM", "PM"),
    entry("pt", H24, "h:mm a", "HH:mm", "AM", "PM"),
    entry("nl", H24, "h:mm a", "HH:mm", "a.m.", "p.m."),
    entry("sv", H24, "h:mm a", "HH:mm", "fm", "em"),
    entry("da", H24, "h.mm a", "HH.mm", "AM", "PM"),
    entry("nb", H24, "h:mm a", "HH:mm", "a.m.", "p.m."),
    entry("fi", H24, "h.mm a", "H.mm", "ap.", "ip."),
    entry("pl", H24, "h:mm a", "HH:mm", "AM", "PM"),
    entry("cs", H24, "h:mm a", "H:mm", "dop.", "odp."),
    entry("ru", H24, "h:mm a", "HH:mm", "AM", "PM"),
    entry("uk", H24, "h:mm a", "HH:mm", "дп", "пп"),
    entry("tr", H24, "a h:mm", "HH:mm", "ÖÖ", "ÖS"),
    entry("el", H12, "h:mm a", "HH:mm", "π.μ.", "μ.μ."),
    entry("he", H24, "h:mm a", "H:mm", "לפנה״צ", "אחה״צ"),
    entry("ar", H12, "h:mm a", "HH:mm", "ص", "م"),
    entry("hi", H12, "h:mm a", "HH:mm", "am", "pm"),
    entry("ja", H24, "ah:mm", "H:mm", "午前", "午後"),
    entry("ko", H12, "a h:mm", "HH:mm", "오전", "오후"),
    entry("zh", H24, "ah:mm", "HH:mm", "上午", "下午"),
    entry("zh-TW", H12, "ah:mm", "HH:mm", "上午", "下午"),
    entry("th", H24, "h:mm a", "HH:mm", "ก่อนเที่ยง", "หลังเที่ยง"),
    entry("vi", H24, "h:mm a", "HH:mm", "SA", "CH"),
    entry("id", H24, "h.mm a", "HH.mm", "AM", "PM"),
];

/// A [`LocaleService`] backed by the embedded locale table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

impl BuiltinLocales {
    pub fn new() -> Self {
        Self
    }

    /// Returns every locale tag with dedicated data, sorted.
    pub fn known_locales(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = LOCALE_TABLE.iter().map(|d| d.tag).collect();
        tags.sort();
        tags
    }

    /// Returns the preferred hour cycle, honouring an `-u-hc-` keyword.
    pub fn preferred_hour_cycle(&self, locale: &PickerLocale) -> HourCycle {
        locale
            .hour_cycle_override()
            .unwrap_or_else(|| lookup(locale).hour_cycle)
    }
}

fn lookup(locale: &PickerLocale) -> &'static LocaleData {
    let language = locale.language();
    let full = locale
        .region()
        .map(|region| format!("{}-{}", language, region));

    full.as_deref()
        .and_then(|tag| LOCALE_TABLE.iter().find(|d| d.tag == tag))
        .or_else(|| LOCALE_TABLE.iter().find(|d| d.tag == language))
        .unwrap_or(&ROOT)
}

impl LocaleService for BuiltinLocales {
    fn date_format_pattern(&self, template: &str, locale: &PickerLocale) -> Option<String> {
        let fields = analyze_template(template);
        let data = lookup(locale);

        let cycle = match fields.hour {
            Some(Some(cycle)) => cycle,
            Some(None) => self.preferred_hour_cycle(locale),
            None if fields.minute => return Some("mm".to_string()),
            None => return None,
        };

        let pattern = match cycle {
            HourCycle::Twelve => data.twelve_hour,
            HourCycle::TwentyFour => data.twenty_four_hour,
        };

        if fields.minute {
            Some(pattern.to_string())
        } else {
            Some(strip_minutes(pattern))
        }
    }

    fn am_pm_symbols(&self, locale: &PickerLocale) -> (String, String) {
        let data = lookup(locale);
        (data.am.to_string(), data.pm.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(template: &str, tag: &str) -> Option<String> {
        BuiltinLocales.date_format_pattern(template, &PickerLocale::parse(tag))
    }

    #[test]
    fn test_locale_preferred_cycle() {
        assert_eq!(resolve("jj:mm", "en-US").as_deref(), Some("h:mm a"));
        assert_eq!(resolve("jj:mm", "en-GB").as_deref(), Some("HH:mm"));
        assert_eq!(resolve("jj:mm", "de-DE").as_deref(), Some("HH:mm"));
        assert_eq!(resolve("jj:mm", "ko-KR").as_deref(), Some("a h:mm"));
    }

    #[test]
    fn test_forced_cycle_overrides_locale() {
        assert_eq!(resolve("hh:mm", "de-DE").as_deref(), Some("h:mm a"));
        assert_eq!(resolve("HH:mm", "en-US").as_deref(), Some("HH:mm"));
    }

    #[test]
    fn test_hc_keyword_wins_for_preferred_cycle() {
        assert_eq!(resolve("jj:mm", "en-US-u-hc-h23").as_deref(), Some("HH:mm"));
        assert_eq!(resolve("jj:mm", "ja-JP-u-hc-h12").as_deref(), Some("ah:mm"));
    }

    #[test]
    fn test_partial_templates() {
        assert_eq!(resolve("jj", "en-US").as_deref(), Some("h a"));
        assert_eq!(resolve("mm", "en-US").as_deref(), Some("mm"));
        assert_eq!(resolve("yyyy", "en-US"), None);
    }

    #[test]
    fn test_unknown_language_uses_root() {
        assert_eq!(resolve("jj:mm", "xx").as_deref(), Some("HH:mm"));
        let (am, pm) = BuiltinLocales.am_pm_symbols(&PickerLocale::parse("xx"));
        assert_eq!((am.as_str(), pm.as_str()), ("AM", "PM"));
    }

    #[test]
    fn test_region_specific_symbols() {
        let (am, pm) = BuiltinLocales.am_pm_symbols(&PickerLocale::parse("en-GB"));
        assert_eq!((am.as_str(), pm.as_str()), ("am", "pm"));
        let (am, _) = BuiltinLocales.am_pm_symbols(&PickerLocale::parse("en-NZ"));
        assert_eq!(am, "AM");
    }

    #[test]
    fn test_known_locales_sorted() {
        let tags = BuiltinLocales.known_locales();
        assert!(tags.windows(2).all(|w| w[0] <= w[1]));
        assert!(tags.contains(&"en"));
    }
}
