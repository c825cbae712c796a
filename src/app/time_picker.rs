//! A complete picker: the coordinator plus one wheel view per wheel.
//!
//! The host supplies a factory that creates a scroll widget for each wheel
//! and forwards the widgets' scroll callbacks by wheel position.

use crate::app::{PickerCoordinator, SelectionChange, Spacer};
use crate::component::PickerComponent;
use crate::config::{PickerConfig, PickerMetrics};
use crate::domain::ScrollMode;
use crate::error::{PickerError, Result};
use crate::locale::{FormatSpec, LocaleService, PickerLocale};
use crate::time::{HourMinute, TimeFields};
use crate::traits::{PickerObserver, ScrollWidget};
use crate::ui::WheelView;

/// Everything a host needs to create the widget for one wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSpec {
    pub component: PickerComponent,
    pub width: f64,
    pub row_height: f64,
    pub scroll_mode: ScrollMode,
    pub item_count: usize,
}

/// Creates the host widget for a wheel, or `None` if it cannot.
pub type WheelFactory<W> = Box<dyn FnMut(&WheelSpec) -> Option<W>>;

/// An observer whose metrics could not be applied, returned to the caller
/// together with the reason.
pub struct RejectedObserver<T> {
    pub error: PickerError,
    pub observer: Box<dyn PickerObserver<T>>,
}

impl<T> std::fmt::Debug for RejectedObserver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RejectedObserver").field("error", &self.error).finish_non_exhaustive()
    }
}

/// A time picker driving host scroll widgets of type `W`.
pub struct TimePicker<T: TimeFields, W: ScrollWidget> {
    coordinator: PickerCoordinator<T>,
    wheels: Vec<WheelView<W>>,
    factory: WheelFactory<W>,
    service: Box<dyn LocaleService>,
}

impl<T: TimeFields, W: ScrollWidget> TimePicker<T, W> {
    /// Builds a picker showing `time`.
    ///
    /// # Errors
    /// [`PickerError::MissingWidget`] if the factory declines a wheel
    pub fn new(
        time: T,
        locale: PickerLocale,
        format: FormatSpec,
        service: Box<dyn LocaleService>,
        factory: WheelFactory<W>,
    ) -> Result<Self> {
        Self::with_metrics(time, locale, format, PickerMetrics::default(), service, factory)
    }

    /// Builds a picker from a configuration. The configured initial time,
    /// if any, replaces the hour and minute of `time`.
    pub fn from_config(
        config: &PickerConfig,
        time: T,
        service: Box<dyn LocaleService>,
        factory: WheelFactory<W>,
    ) -> Result<Self> {
        let time = match config.initial_time {
            Some(initial) => time.with_hour_minute(initial.hour_minute()),
            None => time,
        };
        Self::with_metrics(
            time,
            config.locale(),
            config.format.clone(),
            config.metrics(),
            service,
            factory,
        )
    }

    pub fn with_metrics(
        time: T,
        locale: PickerLocale,
        format: FormatSpec,
        metrics: PickerMetrics,
        service: Box<dyn LocaleService>,
        factory: WheelFactory<W>,
    ) -> Result<Self> {
        let coordinator = PickerCoordinator::new(time, locale, format, service.as_ref()).with_metrics(metrics);
        let mut picker = Self {
            coordinator,
            wheels: Vec::new(),
            factory,
            service,
        };
        picker.reload()?;
        Ok(picker)
    }

    /// Recreates every wheel widget from the coordinator's current layout.
    /// On error the previous wheels stay in place.
    pub fn reload(&mut self) -> Result<()> {
        self.wheels = self.build_wheels()?;
        Ok(())
    }

    fn build_wheels(&mut self) -> Result<Vec<WheelView<W>>> {
        let metrics = self.coordinator.metrics();
        let mut wheels = Vec::with_capacity(self.coordinator.number_of_components());

        for state in self.coordinator.components() {
            let position = state.position();
            let spec = WheelSpec {
                component: state.component(),
                width: self
                    .coordinator
                    .width_for_component(position)
                    .unwrap_or(metrics.component_width),
                row_height: self
                    .coordinator
                    .item_height_for_component(position)
                    .unwrap_or(metrics.item_height),
                scroll_mode: self
                    .coordinator
                    .scroll_mode_for_component(position)
                    .unwrap_or_else(|| state.unit().default_scroll_mode()),
                item_count: state.item_count(),
            };

            let widget = (self.factory)(&spec).ok_or(PickerError::MissingWidget {
                position,
                unit: state.unit(),
            })?;
            let mut wheel = WheelView::new(
                spec.component,
                spec.item_count,
                spec.scroll_mode,
                spec.row_height,
                widget,
            )?;
            wheel.set_selected_item(state.selection(), false);
            wheels.push(wheel);
        }

        tracing::debug!("built {} wheels", wheels.len());
        Ok(wheels)
    }

    // ===== Queries =====

    pub fn coordinator(&self) -> &PickerCoordinator<T> {
        &self.coordinator
    }

    pub fn wheels(&self) -> &[WheelView<W>] {
        &self.wheels
    }

    pub fn wheel(&self, position: usize) -> Option<&WheelView<W>> {
        self.wheels.get(position)
    }

    pub fn widget_mut(&mut self, position: usize) -> Option<&mut W> {
        self.wheels.get_mut(position).map(|wheel| wheel.widget_mut())
    }

    pub fn time(&self) -> T {
        self.coordinator.time()
    }

    pub fn hour_minute(&self) -> HourMinute {
        self.coordinator.hour_minute()
    }

    /// Text for a physical row of the wheel at `position`.
    pub fn title_for_row(&self, position: usize, row: usize) -> Option<String> {
        let item = self.wheel(position)?.item_at_row(row)?;
        self.coordinator.title_for_item(position, item)
    }

    pub fn spacer_after(&self, position: usize) -> Option<Spacer> {
        self.coordinator.spacer_after(position)
    }

    // ===== Programmatic changes =====

    /// Shows `time`, moving only the wheels whose item changed.
    pub fn set_time(&mut self, time: T, animated: bool) -> Vec<SelectionChange> {
        let changes = self.coordinator.set_time(time);
        for change in &changes {
            if let Some(wheel) = self.wheels.get_mut(change.position) {
                wheel.set_selected_item(change.item, animated);
            }
        }
        changes
    }

    /// Switches locale, rebuilding the wheels around the current time.
    ///
    /// # Errors
    /// [`PickerError::MissingWidget`] if the factory declines a new wheel.
    /// The picker then keeps its previous locale and wheels.
    pub fn set_locale(&mut self, locale: PickerLocale) -> Result<()> {
        let previous = self.coordinator.locale().clone();
        self.coordinator.set_locale(locale, self.service.as_ref());
        if let Err(err) = self.reload() {
            tracing::warn!("keeping locale {}: {}", previous, err);
            self.coordinator.set_locale(previous, self.service.as_ref());
            return Err(err);
        }
        Ok(())
    }

    /// Switches format like [`Self::set_locale`], with the same rollback.
    pub fn set_format(&mut self, format: FormatSpec) -> Result<()> {
        let previous = self.coordinator.format().clone();
        self.coordinator.set_format(format, self.service.as_ref());
        if let Err(err) = self.reload() {
            tracing::warn!("keeping format {:?}: {}", previous, err);
            self.coordinator.set_format(previous, self.service.as_ref());
            return Err(err);
        }
        Ok(())
    }

    /// Installs `observer` and rebuilds the wheels so its metrics apply.
    ///
    /// # Errors
    /// If the wheels cannot be rebuilt the previous observer is reinstated
    /// and `observer` is handed back in the [`RejectedObserver`].
    pub fn register_observer(
        &mut self,
        observer: Box<dyn PickerObserver<T>>,
    ) -> std::result::Result<Option<Box<dyn PickerObserver<T>>>, RejectedObserver<T>> {
        let previous = self.coordinator.register_observer(observer);
        match self.reload() {
            Ok(()) => Ok(previous),
            Err(error) => {
                let rejected = match previous {
                    Some(previous) => self.coordinator.register_observer(previous),
                    None => self.coordinator.unregister_observer(),
                };
                match rejected {
                    Some(observer) => Err(RejectedObserver { error, observer }),
                    None => Ok(None),
                }
            }
        }
    }

    /// Removes the observer. Wheels keep their current metrics.
    pub fn unregister_observer(&mut self) -> Option<Box<dyn PickerObserver<T>>> {
        self.coordinator.unregister_observer()
    }

    // ===== Wheel events =====

    pub fn begin_dragging(&mut self, position: usize) {
        if let Some(wheel) = self.wheels.get_mut(position) {
            wheel.begin_dragging();
        }
    }

    /// Forwards a scroll of the wheel at `position` to the observer.
    pub fn did_scroll(&mut self, position: usize) {
        let Some(wheel) = self.wheels.get_mut(position) else {
            return;
        };
        for scroll in wheel.did_scroll() {
            self.coordinator
                .notify_item_scrolled(position, scroll.item, scroll.offset_from_center);
        }
    }

    /// A drag on the wheel at `position` was released.
    ///
    /// # Returns
    /// The offset the widget should come to rest at
    pub fn will_end_dragging(&mut self, position: usize, velocity: f64, proposed_offset: f64) -> Option<f64> {
        let selection = self
            .wheels
            .get_mut(position)?
            .will_end_dragging(velocity, proposed_offset)?;
        self.coordinator.handle_user_selection(position, selection.item);
        Some(selection.offset)
    }

    pub fn did_end_decelerating(&mut self, position: usize) -> bool {
        self.wheels
            .get_mut(position)
            .map(|wheel| wheel.did_end_decelerating())
            .unwrap_or(false)
    }

    /// A row of the wheel at `position` was tapped.
    pub fn did_select_row(&mut self, position: usize, row: usize) -> Option<T> {
        let selection = self.wheels.get_mut(position)?.did_select_row(row)?;
        self.coordinator.handle_user_selection(position, selection.item)
    }

    /// Steps the wheel at `position` by `delta` items as a user selection.
    pub fn step_selection(&mut self, position: usize, delta: isize) -> Option<T> {
        let selection = self.wheels.get_mut(position)?.step_selection(delta)?;
        self.coordinator.handle_user_selection(position, selection.item)
    }

    /// The host viewport was resized.
    pub fn layout_changed(&mut self) {
        for wheel in &mut self.wheels {
            wheel.layout_changed();
        }
    }
}
