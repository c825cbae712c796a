//! The catalog of wheel kinds.
//!
//! Every wheel shows one [`ComponentUnit`]. Each unit knows its pattern
//! symbol, the calendar field it feeds, its item domain and how to move
//! between an item index and (hour, minute) fields. Dispatch is a plain
//! `match` per operation.

use serde::{Deserialize, Serialize};

use crate::domain::ScrollMode;
use crate::locale::{LocaleService, PickerLocale};
use crate::time::HourMinute;

/// The calendar field a unit contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarField {
    Hour,
    Minute,
}

/// A kind of wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentUnit {
    Hour12,
    Hour24,
    Minute,
    AmPm,
}

/// Hour and minute parts contributed by a single wheel.
///
/// Parts from all wheels are summed, which lets a 12-hour wheel (0-11) and
/// a day-period wheel (0 or 12) produce a 0-23 hour together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialFields {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl PartialFields {
    /// Sums the contributions of several wheels into an hour/minute pair.
    pub fn combine<I>(parts: I) -> HourMinute
    where
        I: IntoIterator<Item = PartialFields>,
    {
        let (hour, minute) = parts.into_iter().fold((0u32, 0u32), |(h, m), part| {
            (h + part.hour.unwrap_or(0), m + part.minute.unwrap_or(0))
        });
        HourMinute::new_wrapping(hour, minute)
    }
}

impl ComponentUnit {
    /// All units in catalog order. Layout uses this order to break ties.
    pub const ALL: [ComponentUnit; 4] = [
        ComponentUnit::Hour12,
        ComponentUnit::Hour24,
        ComponentUnit::Minute,
        ComponentUnit::AmPm,
    ];

    /// The pattern letter that marks this unit.
    pub fn format_symbol(self) -> char {
        match self {
            ComponentUnit::Hour12 => 'h',
            ComponentUnit::Hour24 => 'H',
            ComponentUnit::Minute => 'm',
            ComponentUnit::AmPm => 'a',
        }
    }

    /// The calendar field fed by this unit. The day period folds into the hour.
    pub fn calendar_field(self) -> Option<CalendarField> {
        match self {
            ComponentUnit::Hour12 | ComponentUnit::Hour24 => Some(CalendarField::Hour),
            ComponentUnit::Minute => Some(CalendarField::Minute),
            ComponentUnit::AmPm => None,
        }
    }

    /// Number of distinct items on the wheel.
    pub fn item_count(self) -> usize {
        match self {
            ComponentUnit::Hour12 => 12,
            ComponentUnit::Hour24 => 24,
            ComponentUnit::Minute => 60,
            ComponentUnit::AmPm => 2,
        }
    }

    /// The day period scrolls finitely; every other unit loops.
    pub fn default_scroll_mode(self) -> ScrollMode {
        match self {
            ComponentUnit::AmPm => ScrollMode::Finite,
            _ => ScrollMode::Infinite,
        }
    }

    /// Display titles in item order.
    pub fn titles(self, locale: &PickerLocale, service: &dyn LocaleService) -> Vec<String> {
        match self {
            ComponentUnit::Hour12 => (1..=12).map(|h| h.to_string()).collect(),
            ComponentUnit::Hour24 => (0..24).map(|h| format!("{:02}", h)).collect(),
            ComponentUnit::Minute => (0..60).map(|m| format!("{:02}", m)).collect(),
            ComponentUnit::AmPm => {
                let (am, pm) = service.am_pm_symbols(locale);
                vec![am, pm]
            }
        }
    }

    /// The item index showing `value` on this wheel.
    pub fn selection_from_fields(self, value: HourMinute) -> usize {
        let hour = value.hour as usize;
        let minute = value.minute as usize;
        match self {
            // hour 0 shows "12" (index 11), hour 1 shows "1" (index 0)
            ComponentUnit::Hour12 => (hour + 11) % 12,
            ComponentUnit::Hour24 => hour % 24,
            ComponentUnit::Minute => minute % 60,
            ComponentUnit::AmPm => (hour / 12).min(1),
        }
    }

    /// The fields contributed when item `index` is selected.
    pub fn fields_from_selection(self, index: usize) -> PartialFields {
        let index = index as u32;
        match self {
            ComponentUnit::Hour12 => PartialFields {
                hour: Some((index + 1) % 12),
                minute: None,
            },
            ComponentUnit::Hour24 => PartialFields {
                hour: Some(index),
                minute: None,
            },
            ComponentUnit::Minute => PartialFields {
                hour: None,
                minute: Some(index),
            },
            ComponentUnit::AmPm => PartialFields {
                hour: Some(index * 12),
                minute: None,
            },
        }
    }
}

/// One wheel instance: its unit and its position in the left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickerComponent {
    pub unit: ComponentUnit,
    pub position: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::BuiltinLocales;

    #[test]
    fn test_hour12_mapping() {
        let unit = ComponentUnit::Hour12;
        let titles = unit.titles(&PickerLocale::parse("en-US"), &BuiltinLocales);

        let midnight = unit.selection_from_fields(HourMinute { hour: 0, minute: 0 });
        assert_eq!(midnight, 11);
        assert_eq!(titles[midnight], "12");

        let one = unit.selection_from_fields(HourMinute { hour: 1, minute: 0 });
        assert_eq!(one, 0);
        assert_eq!(titles[one], "1");

        assert_eq!(unit.selection_from_fields(HourMinute { hour: 13, minute: 0 }), 0);
        assert_eq!(ComponentUnit::AmPm.selection_from_fields(HourMinute { hour: 13, minute: 0 }), 1);
    }

    #[test]
    fn test_titles_lengths_match_domain() {
        let locale = PickerLocale::parse("ko-KR");
        for unit in ComponentUnit::ALL {
            assert_eq!(unit.titles(&locale, &BuiltinLocales).len(), unit.item_count());
        }
        assert_eq!(
            ComponentUnit::AmPm.titles(&locale, &BuiltinLocales),
            vec!["오전".to_string(), "오후".to_string()]
        );
        assert_eq!(ComponentUnit::Minute.titles(&locale, &BuiltinLocales)[7], "07");
        assert_eq!(ComponentUnit::Hour24.titles(&locale, &BuiltinLocales)[0], "00");
    }

    #[test]
    fn test_twelve_hour_round_trip() {
        for hour in 0..24 {
            for minute in 0..60 {
                let value = HourMinute { hour, minute };
                let parts = [ComponentUnit::Hour12, ComponentUnit::Minute, ComponentUnit::AmPm]
                    .iter()
                    .map(|u| u.fields_from_selection(u.selection_from_fields(value)));
                assert_eq!(PartialFields::combine(parts), value);
            }
        }
    }

    #[test]
    fn test_twenty_four_hour_round_trip() {
        for hour in 0..24 {
            for minute in 0..60 {
                let value = HourMinute { hour, minute };
                let parts = [ComponentUnit::Hour24, ComponentUnit::Minute]
                    .iter()
                    .map(|u| u.fields_from_selection(u.selection_from_fields(value)));
                assert_eq!(PartialFields::combine(parts), value);
            }
        }
    }

    #[test]
    fn test_combine_nothing_is_midnight() {
        assert_eq!(PartialFields::combine(Vec::new()), HourMinute::MIDNIGHT);
    }

    #[test]
    fn test_calendar_fields() {
        assert_eq!(ComponentUnit::Hour12.calendar_field(), Some(CalendarField::Hour));
        assert_eq!(ComponentUnit::Hour24.calendar_field(), Some(CalendarField::Hour));
        assert_eq!(ComponentUnit::Minute.calendar_field(), Some(CalendarField::Minute));
        assert_eq!(ComponentUnit::AmPm.calendar_field(), None);
    }

    #[test]
    fn test_scroll_mode_defaults() {
        assert_eq!(ComponentUnit::AmPm.default_scroll_mode(), ScrollMode::Finite);
        assert_eq!(ComponentUnit::Minute.default_scroll_mode(), ScrollMode::Infinite);
    }
}
