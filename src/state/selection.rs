//! Selection state of a single wheel.
//!
//! This module encapsulates the discrete selection of one wheel and its
//! conversion to and from calendar fields.

use crate::component::{ComponentUnit, PartialFields, PickerComponent};
use crate::locale::{LocaleService, PickerLocale};
use crate::time::HourMinute;

/// State of one wheel.
///
/// Responsibilities:
/// - Holding the wheel's unit, position and display titles
/// - Tracking the selected item index (always within the title range)
/// - Converting between the selection and hour/minute fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSelectionState {
    component: PickerComponent,
    /// Display titles, one per item
    titles: Vec<String>,
    /// Selected item index
    selection: usize,
}

impl ComponentSelectionState {
    /// Creates the state for `component`, selecting the item that shows `value`.
    pub fn new(
        component: PickerComponent,
        value: HourMinute,
        locale: &PickerLocale,
        service: &dyn LocaleService,
    ) -> Self {
        let mut state = Self {
            component,
            titles: component.unit.titles(locale, service),
            selection: 0,
        };
        state.set_selection_from_fields(value);
        state
    }

    // ===== Queries =====

    pub fn component(&self) -> PickerComponent {
        self.component
    }

    pub fn unit(&self) -> ComponentUnit {
        self.component.unit
    }

    pub fn position(&self) -> usize {
        self.component.position
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Returns the title of `item`, if it exists.
    pub fn title(&self, item: usize) -> Option<&str> {
        self.titles.get(item).map(|s| s.as_str())
    }

    pub fn item_count(&self) -> usize {
        self.titles.len()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Returns the fields this wheel contributes to the combined time.
    pub fn selected_fields(&self) -> PartialFields {
        self.unit().fields_from_selection(self.selection)
    }

    // ===== Mutations =====

    /// Selects `item`. Out-of-range items are ignored and `false` is returned.
    pub fn select(&mut self, item: usize) -> bool {
        if item >= self.titles.len() {
            return false;
        }
        self.selection = item;
        true
    }

    /// Selects the item that shows `value`.
    ///
    /// # Returns
    /// `true` if the selection changed
    pub fn set_selection_from_fields(&mut self, value: HourMinute) -> bool {
        let previous = self.selection;
        self.selection = self.unit().selection_from_fields(value);
        previous != self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::BuiltinLocales;

    fn state(unit: ComponentUnit, hour: u32, minute: u32) -> ComponentSelectionState {
        ComponentSelectionState::new(
            PickerComponent { unit, position: 0 },
            HourMinute { hour, minute },
            &PickerLocale::parse("en-US"),
            &BuiltinLocales,
        )
    }

    #[test]
    fn test_initial_selection_from_time() {
        assert_eq!(state(ComponentUnit::Hour12, 0, 0).selection(), 11);
        assert_eq!(state(ComponentUnit::Minute, 9, 41).selection(), 41);
        assert_eq!(state(ComponentUnit::AmPm, 18, 0).selection(), 1);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut wheel = state(ComponentUnit::AmPm, 9, 0);
        assert!(!wheel.select(2));
        assert_eq!(wheel.selection(), 0);
        assert!(wheel.select(1));
        assert_eq!(wheel.selection(), 1);
    }

    #[test]
    fn test_set_from_fields_reports_change() {
        let mut wheel = state(ComponentUnit::Minute, 9, 41);
        assert!(!wheel.set_selection_from_fields(HourMinute { hour: 10, minute: 41 }));
        assert!(wheel.set_selection_from_fields(HourMinute { hour: 10, minute: 42 }));
    }

    #[test]
    fn test_title_lookup() {
        let wheel = state(ComponentUnit::AmPm, 9, 0);
        assert_eq!(wheel.title(0), Some("AM"));
        assert_eq!(wheel.title(5), None);
    }
}
