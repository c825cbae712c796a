use std::ops::Range;

use crate::component::PickerComponent;
use crate::domain::ScrollMode;

/// A host scrollable list backing one wheel.
///
/// The widget only renders rows and reports geometry. Which item a row shows
/// and where the content should rest are decided by [`crate::WheelView`].
/// Gesture callbacks (drag start, release, end of momentum) are forwarded by
/// the host to the picker, not pulled through this trait.
pub trait ScrollWidget {
    /// Current vertical content offset.
    fn content_offset(&self) -> f64;

    /// Moves the content, optionally animated.
    fn set_content_offset(&mut self, offset: f64, animated: bool);

    /// Height of the visible viewport.
    fn visible_height(&self) -> f64;

    /// Rows currently on screen.
    fn visible_rows(&self) -> Range<usize>;

    /// Replaces the row count and height; rows are rendered by index.
    fn reload_rows(&mut self, total_rows: usize, row_height: f64);
}

/// Application hooks into a picker.
///
/// Notifications arrive synchronously on the thread driving the picker.
/// Queries return `None` to accept the picker's default.
#[allow(unused_variables)]
pub trait PickerObserver<T> {
    /// A wheel's selection was changed by the user.
    fn on_selection_changed(&mut self, component: PickerComponent, item: usize) {}

    /// The combined time changed after a user selection. Always follows
    /// [`PickerObserver::on_selection_changed`].
    fn on_time_changed(&mut self, time: &T) {}

    /// A visible row moved; `offset_from_center` is signed, positive below centre.
    fn on_item_scrolled(&mut self, component: PickerComponent, item: usize, offset_from_center: f64) {}

    fn width_for_component(&self, component: PickerComponent) -> Option<f64> {
        None
    }

    fn item_height_for_component(&self, component: PickerComponent) -> Option<f64> {
        None
    }

    /// Replaces the title shown for `item`; `suggested` is the locale title.
    fn symbol_for_item(&self, component: PickerComponent, item: usize, suggested: &str) -> Option<String> {
        None
    }

    /// Label placed between two adjacent wheels, e.g. `":"`.
    fn spacer_between(&self, left: PickerComponent, right: PickerComponent) -> Option<String> {
        None
    }

    fn spacer_width_between(&self, left: PickerComponent, right: PickerComponent) -> Option<f64> {
        None
    }

    fn scroll_mode_for_component(&self, component: PickerComponent) -> Option<ScrollMode> {
        None
    }
}
