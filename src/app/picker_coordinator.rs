//! The picker's view-model.
//!
//! Owns the ordered wheel states and the time value they represent, and
//! mediates between wheels, the application observer and programmatic
//! updates.

use crate::component::{layout, PartialFields, PickerComponent};
use crate::config::{PickerMetrics, DEFAULT_SPACER_WIDTH};
use crate::domain::ScrollMode;
use crate::locale::{FormatResolver, FormatSpec, LocaleService, PickerLocale};
use crate::state::ComponentSelectionState;
use crate::time::{HourMinute, TimeFields};
use crate::traits::PickerObserver;

/// A wheel whose selection moved during a programmatic update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub position: usize,
    pub item: usize,
}

/// What sits between two adjacent wheels.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    /// Text shown in the gap, e.g. `":"`
    pub label: Option<String>,
    pub width: f64,
}

/// Coordinates the wheels of one picker.
///
/// Responsibilities:
/// - Resolving the format and laying out the wheels
/// - Combining wheel selections into the canonical time
/// - Pushing programmatic time changes into every wheel
/// - Notifying the observer of user-driven changes
/// - Answering appearance queries with observer overrides or defaults
pub struct PickerCoordinator<T: TimeFields> {
    locale: PickerLocale,
    format: FormatSpec,
    /// The concrete pattern the wheels were laid out from
    pattern: String,
    components: Vec<ComponentSelectionState>,
    /// Source of the fields the wheels don't cover (date, seconds, zone)
    base: T,
    metrics: PickerMetrics,
    observer: Option<Box<dyn PickerObserver<T>>>,
}

impl<T: TimeFields> PickerCoordinator<T> {
    /// Resolves `format` for `locale` and builds one wheel per field found,
    /// each selecting the item that shows `time`.
    pub fn new(time: T, locale: PickerLocale, format: FormatSpec, service: &dyn LocaleService) -> Self {
        let mut coordinator = Self {
            locale,
            format,
            pattern: String::new(),
            components: Vec::new(),
            base: time,
            metrics: PickerMetrics::default(),
            observer: None,
        };
        coordinator.rebuild(service);
        coordinator
    }

    /// Replaces the fallback metrics used when the observer has no answer.
    pub fn with_metrics(mut self, metrics: PickerMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn rebuild(&mut self, service: &dyn LocaleService) {
        self.pattern = FormatResolver::resolve_spec(service, &self.locale, &self.format);
        let value = self.base.hour_minute();
        self.components = layout(&self.pattern)
            .into_iter()
            .map(|component| ComponentSelectionState::new(component, value, &self.locale, service))
            .collect();
        tracing::debug!(
            "laid out {} wheels from {:?} for {}",
            self.components.len(),
            self.pattern,
            self.locale
        );
    }

    // ===== Queries =====

    /// Locale the layout was resolved for.
    pub fn locale(&self) -> &PickerLocale {
        &self.locale
    }

    /// Requested format, before locale resolution.
    pub fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Resolved pattern the wheels were laid out from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Fallback sizes used when the observer has no opinion.
    pub fn metrics(&self) -> PickerMetrics {
        self.metrics
    }

    /// Wheel states, left to right.
    pub fn components(&self) -> &[ComponentSelectionState] {
        &self.components
    }

    /// Bounds-checked access to one wheel's state.
    pub fn component_state(&self, position: usize) -> Option<&ComponentSelectionState> {
        self.components.get(position)
    }

    /// Number of wheels.
    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Item count of the wheel at `position`, 0 when out of range.
    pub fn items_in_component(&self, position: usize) -> usize {
        self.component_state(position)
            .map(|state| state.item_count())
            .unwrap_or(0)
    }

    pub fn selected_items(&self) -> Vec<usize> {
        self.components.iter().map(|state| state.selection()).collect()
    }

    /// The hour and minute shown by the wheels. With no wheels this is 00:00.
    pub fn hour_minute(&self) -> HourMinute {
        PartialFields::combine(self.components.iter().map(|state| state.selected_fields()))
    }

    /// The canonical time: the base value with the wheels' hour and minute.
    pub fn time(&self) -> T {
        self.base.with_hour_minute(self.hour_minute())
    }

    // ===== Mutations =====

    /// Changes the locale and rebuilds the wheels around the current time.
    pub fn set_locale(&mut self, locale: PickerLocale, service: &dyn LocaleService) {
        self.base = self.time();
        self.locale = locale;
        self.rebuild(service);
    }

    /// Changes the format and rebuilds the wheels around the current time.
    pub fn set_format(&mut self, format: FormatSpec, service: &dyn LocaleService) {
        self.base = self.time();
        self.format = format;
        self.rebuild(service);
    }

    /// Moves every wheel to show `time`.
    ///
    /// All wheels are updated before this returns; no observer notifications
    /// are raised.
    ///
    /// # Returns
    /// The wheels whose selected item actually changed, in position order
    pub fn set_time(&mut self, time: T) -> Vec<SelectionChange> {
        let value = time.hour_minute();
        self.base = time;

        let changes: Vec<SelectionChange> = self
            .components
            .iter_mut()
            .filter_map(|state| {
                state.set_selection_from_fields(value).then(|| SelectionChange {
                    position: state.position(),
                    item: state.selection(),
                })
            })
            .collect();

        tracing::debug!("set time to {}, {} wheels changed", value, changes.len());
        changes
    }

    /// Applies a selection made by the user on the wheel at `position`.
    ///
    /// Notifies the observer of the selection and then of the new time.
    /// Stale positions and out-of-range items are ignored.
    ///
    /// # Returns
    /// The new canonical time, or `None` if the selection was ignored
    pub fn handle_user_selection(&mut self, position: usize, item: usize) -> Option<T> {
        let Some(state) = self.components.get_mut(position) else {
            tracing::warn!("selection on unknown wheel {} ignored", position);
            return None;
        };
        if !state.select(item) {
            tracing::warn!(
                "item {} out of range for wheel {} ({} items), ignored",
                item,
                position,
                state.item_count()
            );
            return None;
        }
        let component = state.component();

        let time = self.time();
        self.base = time.clone();

        if let Some(observer) = self.observer.as_mut() {
            observer.on_selection_changed(component, item);
            observer.on_time_changed(&time);
        }
        Some(time)
    }

    /// Forwards a scroll update of a visible row to the observer.
    pub fn notify_item_scrolled(&mut self, position: usize, item: usize, offset_from_center: f64) {
        let Some(component) = self.component_state(position).map(|s| s.component()) else {
            return;
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.on_item_scrolled(component, item, offset_from_center);
        }
    }

    // ===== Observer =====

    /// Installs `observer`, returning the one it replaces.
    pub fn register_observer(
        &mut self,
        observer: Box<dyn PickerObserver<T>>,
    ) -> Option<Box<dyn PickerObserver<T>>> {
        self.observer.replace(observer)
    }

    /// Removes and returns the current observer.
    pub fn unregister_observer(&mut self) -> Option<Box<dyn PickerObserver<T>>> {
        self.observer.take()
    }

    /// Whether an observer is registered.
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    // ===== Appearance =====

    fn component_at(&self, position: usize) -> Option<PickerComponent> {
        self.component_state(position).map(|state| state.component())
    }

    pub fn width_for_component(&self, position: usize) -> Option<f64> {
        let component = self.component_at(position)?;
        let width = self
            .observer
            .as_ref()
            .and_then(|o| o.width_for_component(component))
            .unwrap_or(self.metrics.component_width);
        Some(width)
    }

    pub fn item_height_for_component(&self, position: usize) -> Option<f64> {
        let component = self.component_at(position)?;
        let height = self
            .observer
            .as_ref()
            .and_then(|o| o.item_height_for_component(component))
            .unwrap_or(self.metrics.item_height);
        Some(height)
    }

    /// Text shown for `item` on the wheel at `position`.
    pub fn title_for_item(&self, position: usize, item: usize) -> Option<String> {
        let state = self.component_state(position)?;
        let suggested = state.title(item)?;
        let title = self
            .observer
            .as_ref()
            .and_then(|o| o.symbol_for_item(state.component(), item, suggested))
            .unwrap_or_else(|| suggested.to_string());
        Some(title)
    }

    /// The gap to the right of the wheel at `position`; `None` for the last wheel.
    pub fn spacer_after(&self, position: usize) -> Option<Spacer> {
        let left = self.component_at(position)?;
        let right = self.component_at(position + 1)?;
        let observer = self.observer.as_ref();
        Some(Spacer {
            label: observer.and_then(|o| o.spacer_between(left, right)),
            width: observer
                .and_then(|o| o.spacer_width_between(left, right))
                .unwrap_or(DEFAULT_SPACER_WIDTH),
        })
    }

    /// Scroll mode for the wheel at `position`: observer, then config, then
    /// the unit's own default.
    pub fn scroll_mode_for_component(&self, position: usize) -> Option<ScrollMode> {
        let component = self.component_at(position)?;
        let mode = self
            .observer
            .as_ref()
            .and_then(|o| o.scroll_mode_for_component(component))
            .or(self.metrics.scroll_mode)
            .unwrap_or_else(|| component.unit.default_scroll_mode());
        Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentUnit;
    use crate::locale::{BuiltinLocales, ClockHourFormat};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Selection(usize, usize),
        Time(HourMinute),
        Scrolled(usize, usize),
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Rc<RefCell<Vec<Event>>>,
        width: Option<f64>,
        spacer: Option<String>,
        spacer_width: Option<f64>,
    }

    impl PickerObserver<HourMinute> for RecordingObserver {
        fn on_selection_changed(&mut self, component: PickerComponent, item: usize) {
            self.events.borrow_mut().push(Event::Selection(component.position, item));
        }

        fn on_time_changed(&mut self, time: &HourMinute) {
            self.events.borrow_mut().push(Event::Time(*time));
        }

        fn on_item_scrolled(&mut self, component: PickerComponent, item: usize, _offset: f64) {
            self.events.borrow_mut().push(Event::Scrolled(component.position, item));
        }

        fn width_for_component(&self, component: PickerComponent) -> Option<f64> {
            (component.unit == ComponentUnit::Minute).then_some(self.width?)
        }

        fn symbol_for_item(&self, component: PickerComponent, _item: usize, suggested: &str) -> Option<String> {
            (component.unit == ComponentUnit::AmPm).then(|| suggested.to_lowercase())
        }

        fn spacer_between(&self, _left: PickerComponent, _right: PickerComponent) -> Option<String> {
            self.spacer.clone()
        }

        fn spacer_width_between(&self, _left: PickerComponent, right: PickerComponent) -> Option<f64> {
            (right.unit == ComponentUnit::AmPm).then_some(self.spacer_width?)
        }
    }

    fn coordinator(hour: u32, minute: u32, locale: &str, format: ClockHourFormat) -> PickerCoordinator<HourMinute> {
        PickerCoordinator::new(
            HourMinute { hour, minute },
            PickerLocale::parse(locale),
            format.into(),
            &BuiltinLocales,
        )
    }

    fn units(coordinator: &PickerCoordinator<HourMinute>) -> Vec<ComponentUnit> {
        coordinator.components().iter().map(|s| s.unit()).collect()
    }

    #[test]
    fn test_initial_layout_and_selection() {
        let c = coordinator(13, 5, "en-US", ClockHourFormat::LocalePreferred);
        assert_eq!(c.pattern(), "h:mm a");
        assert_eq!(units(&c), vec![ComponentUnit::Hour12, ComponentUnit::Minute, ComponentUnit::AmPm]);
        assert_eq!(c.selected_items(), vec![0, 5, 1]);
        assert_eq!(c.time(), HourMinute { hour: 13, minute: 5 });
    }

    #[test]
    fn test_round_trip_all_times() {
        for format in [ClockHourFormat::Twelve, ClockHourFormat::TwentyFour] {
            let mut c = coordinator(0, 0, "en-US", format);
            for hour in 0..24 {
                for minute in 0..60 {
                    c.set_time(HourMinute { hour, minute });
                    assert_eq!(c.time(), HourMinute { hour, minute });
                }
            }
        }
    }

    #[test]
    fn test_set_time_reports_only_changed_wheels() {
        let mut c = coordinator(9, 30, "en-US", ClockHourFormat::Twelve);
        assert!(c.set_time(HourMinute { hour: 9, minute: 30 }).is_empty());

        let changes = c.set_time(HourMinute { hour: 21, minute: 30 });
        assert_eq!(changes, vec![SelectionChange { position: 2, item: 1 }]);

        let changes = c.set_time(HourMinute { hour: 22, minute: 45 });
        assert_eq!(
            changes,
            vec![
                SelectionChange { position: 0, item: 9 },
                SelectionChange { position: 1, item: 45 },
            ]
        );
    }

    #[test]
    fn test_set_time_does_not_notify() {
        let mut c = coordinator(9, 30, "en-US", ClockHourFormat::Twelve);
        let events = Rc::new(RefCell::new(Vec::new()));
        c.register_observer(Box::new(RecordingObserver {
            events: events.clone(),
            ..Default::default()
        }));
        c.set_time(HourMinute { hour: 10, minute: 0 });
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_user_selection_notifies_in_order() {
        let mut c = coordinator(9, 30, "en-US", ClockHourFormat::Twelve);
        let events = Rc::new(RefCell::new(Vec::new()));
        c.register_observer(Box::new(RecordingObserver {
            events: events.clone(),
            ..Default::default()
        }));

        let time = c.handle_user_selection(2, 1);
        assert_eq!(time, Some(HourMinute { hour: 21, minute: 30 }));
        assert_eq!(
            *events.borrow(),
            vec![
                Event::Selection(2, 1),
                Event::Time(HourMinute { hour: 21, minute: 30 }),
            ]
        );
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut c = coordinator(9, 30, "en-US", ClockHourFormat::TwentyFour);
        let events = Rc::new(RefCell::new(Vec::new()));
        c.register_observer(Box::new(RecordingObserver {
            events: events.clone(),
            ..Default::default()
        }));

        assert_eq!(c.handle_user_selection(7, 0), None);
        assert_eq!(c.handle_user_selection(1, 60), None);
        assert!(events.borrow().is_empty());
        assert_eq!(c.time(), HourMinute { hour: 9, minute: 30 });
        assert_eq!(c.items_in_component(7), 0);
        assert!(c.title_for_item(1, 60).is_none());
    }

    #[test]
    fn test_empty_format_is_midnight() {
        let c: PickerCoordinator<HourMinute> = PickerCoordinator::new(
            HourMinute { hour: 15, minute: 20 },
            PickerLocale::parse("en-US"),
            FormatSpec::Explicit(String::new()),
            &BuiltinLocales,
        );
        assert_eq!(c.number_of_components(), 0);
        assert_eq!(c.time(), HourMinute::MIDNIGHT);
    }

    #[test]
    fn test_locale_change_keeps_time() {
        let mut c = coordinator(18, 45, "en-US", ClockHourFormat::LocalePreferred);
        c.set_locale(PickerLocale::parse("de-DE"), &BuiltinLocales);
        assert_eq!(units(&c), vec![ComponentUnit::Hour24, ComponentUnit::Minute]);
        assert_eq!(c.time(), HourMinute { hour: 18, minute: 45 });

        c.set_format(ClockHourFormat::Twelve.into(), &BuiltinLocales);
        assert_eq!(c.time(), HourMinute { hour: 18, minute: 45 });
    }

    #[test]
    fn test_preserves_date_fields() {
        let base: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(8, 15, 42).unwrap());
        let mut c = PickerCoordinator::new(
            base,
            PickerLocale::parse("en-GB"),
            ClockHourFormat::TwentyFour.into(),
            &BuiltinLocales,
        );
        let time = c.handle_user_selection(0, 20).unwrap();
        assert_eq!(time.date(), base.date());
        assert_eq!(time.time(), NaiveTime::from_hms_opt(20, 15, 42).unwrap());
    }

    #[test]
    fn test_appearance_defaults_and_overrides() {
        let mut c = coordinator(9, 30, "en-US", ClockHourFormat::Twelve);
        assert_eq!(c.width_for_component(0), Some(80.0));
        assert_eq!(c.item_height_for_component(0), Some(44.0));
        assert_eq!(c.title_for_item(2, 0).as_deref(), Some("AM"));
        assert_eq!(
            c.spacer_after(0),
            Some(Spacer { label: None, width: 10.0 })
        );
        assert_eq!(c.spacer_after(2), None);
        assert_eq!(c.scroll_mode_for_component(0), Some(ScrollMode::Infinite));
        assert_eq!(c.scroll_mode_for_component(2), Some(ScrollMode::Finite));

        c.register_observer(Box::new(RecordingObserver {
            width: Some(60.0),
            spacer: Some(":".to_string()),
            spacer_width: Some(24.0),
            ..Default::default()
        }));
        assert_eq!(c.width_for_component(0), Some(80.0));
        assert_eq!(c.width_for_component(1), Some(60.0));
        assert_eq!(c.title_for_item(2, 1).as_deref(), Some("pm"));
        assert_eq!(
            c.spacer_after(0),
            Some(Spacer { label: Some(":".to_string()), width: 10.0 })
        );
        assert_eq!(
            c.spacer_after(1),
            Some(Spacer { label: Some(":".to_string()), width: 24.0 })
        );
        assert_eq!(c.spacer_after(2), None);

        assert!(c.unregister_observer().is_some());
        assert!(!c.has_observer());
        assert_eq!(c.width_for_component(1), Some(80.0));
    }

    #[test]
    fn test_metrics_fallbacks() {
        let c = coordinator(9, 30, "en-US", ClockHourFormat::Twelve).with_metrics(PickerMetrics {
            component_width: 64.0,
            item_height: 32.0,
            scroll_mode: Some(ScrollMode::Finite),
        });
        assert_eq!(c.width_for_component(1), Some(64.0));
        assert_eq!(c.item_height_for_component(1), Some(32.0));
        assert_eq!(c.scroll_mode_for_component(0), Some(ScrollMode::Finite));
    }

    #[test]
    fn test_item_scrolled_forwarded() {
        let mut c = coordinator(9, 30, "en-US", ClockHourFormat::Twelve);
        let events = Rc::new(RefCell::new(Vec::new()));
        c.register_observer(Box::new(RecordingObserver {
            events: events.clone(),
            ..Default::default()
        }));
        c.notify_item_scrolled(1, 31, 44.0);
        c.notify_item_scrolled(9, 0, 0.0);
        assert_eq!(*events.borrow(), vec![Event::Scrolled(1, 31)]);
    }
}
