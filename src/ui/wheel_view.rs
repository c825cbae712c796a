//! One wheel on top of a host scroll widget.
//!
//! The host forwards its scroll callbacks here. `WheelView` translates them
//! into item selections using the infinite scroll geometry, keeps the gesture
//! phase and quietly re-centres infinite wheels when momentum ends.

use crate::component::PickerComponent;
use crate::domain::{ScrollDirection, ScrollGeometry, ScrollMode};
use crate::error::{PickerError, Result};
use crate::state::{ScrollPhase, ScrollPhaseState};
use crate::traits::ScrollWidget;

/// Offsets closer than this are treated as the same position.
const OFFSET_TOLERANCE: f64 = 0.5;

/// An item chosen on a wheel by a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSelection {
    pub item: usize,
    pub row: usize,
    pub direction: ScrollDirection,
    /// Offset at which the chosen row is centred
    pub offset: f64,
}

/// Position of one visible row relative to the wheel's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemScroll {
    pub row: usize,
    pub item: usize,
    /// Signed distance from the visible centre, positive below it
    pub offset_from_center: f64,
}

/// A wheel: scroll geometry, gesture phase and the selected item, driving a
/// host widget `W`.
pub struct WheelView<W: ScrollWidget> {
    component: PickerComponent,
    geometry: ScrollGeometry,
    phase: ScrollPhaseState,
    selected_item: usize,
    /// Offset set by a silent re-centre; the scroll report it causes is dropped
    silent_offset: Option<f64>,
    widget: W,
}

impl<W: ScrollWidget> WheelView<W> {
    /// Creates a wheel with `item_count` items and loads its rows into `widget`.
    ///
    /// The wheel starts on item 0; call [`WheelView::set_selected_item`] to
    /// move it.
    ///
    /// # Errors
    /// [`PickerError::InvalidRowHeight`] when `row_height` is not a finite
    /// positive number
    pub fn new(
        component: PickerComponent,
        item_count: usize,
        mode: ScrollMode,
        row_height: f64,
        mut widget: W,
    ) -> Result<Self> {
        if !row_height.is_finite() || row_height <= 0.0 {
            return Err(PickerError::InvalidRowHeight(row_height));
        }

        let geometry = ScrollGeometry::new(item_count, mode, row_height);
        widget.reload_rows(geometry.total_rows(), row_height);
        tracing::debug!(
            "wheel {} ({:?}): {} items, {} rows, {:?}",
            component.position,
            component.unit,
            item_count,
            geometry.total_rows(),
            mode
        );

        let mut wheel = Self {
            component,
            geometry,
            phase: ScrollPhaseState::new(),
            selected_item: 0,
            silent_offset: None,
            widget,
        };
        wheel.center_on(0, false);
        Ok(wheel)
    }

    // ===== Queries =====

    /// The wheel this view drives.
    pub fn component(&self) -> PickerComponent {
        self.component
    }

    /// Row layout of the wheel's content.
    pub fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    /// Current gesture phase.
    pub fn phase(&self) -> ScrollPhase {
        self.phase.phase()
    }

    /// Item the wheel last settled on or was set to.
    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    /// The item shown by `row`, or `None` past the last row.
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        (row < self.geometry.total_rows()).then(|| self.geometry.item_at(row))
    }

    /// The host widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access for hosts that move the widget themselves.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    // ===== Scroll callbacks =====

    /// The user put a finger (or pointer) on the wheel.
    pub fn begin_dragging(&mut self) {
        self.phase.begin_drag();
        self.silent_offset = None;
    }

    /// The content offset changed.
    ///
    /// # Returns
    /// Every visible row with its distance from the centre; empty when the
    /// change was caused by a silent re-centre
    pub fn did_scroll(&mut self) -> Vec<ItemScroll> {
        let offset = self.widget.content_offset();
        if let Some(silent) = self.silent_offset.take() {
            if (silent - offset).abs() < OFFSET_TOLERANCE {
                return Vec::new();
            }
        }

        let visible_height = self.widget.visible_height();
        let total_rows = self.geometry.total_rows();
        let rows = self.widget.visible_rows();
        rows.filter(|row| *row < total_rows)
            .map(|row| ItemScroll {
                row,
                item: self.geometry.item_at(row),
                offset_from_center: self.geometry.row_offset_from_center(row, offset, visible_height),
            })
            .collect()
    }

    /// The user released the wheel; `proposed_offset` is where momentum
    /// would stop.
    ///
    /// The host must use the returned offset as the new resting point.
    /// Returns `None` for an empty wheel, in which case the proposal stands.
    pub fn will_end_dragging(&mut self, velocity: f64, proposed_offset: f64) -> Option<WheelSelection> {
        self.phase.end_drag(velocity != 0.0);

        let snap = self.geometry.snap(proposed_offset, self.widget.visible_height())?;
        self.selected_item = snap.item;
        tracing::trace!(
            "wheel {} snapped {:.1} -> {:.1} (row {}, item {}, {:?})",
            self.component.position,
            proposed_offset,
            snap.offset,
            snap.row,
            snap.item,
            snap.direction
        );

        Some(WheelSelection {
            item: snap.item,
            row: snap.row,
            direction: snap.direction,
            offset: snap.offset,
        })
    }

    /// Momentum (or a programmatic animation) came to rest.
    ///
    /// Infinite wheels jump to the same position in the primary block. The
    /// jump is invisible and produces no scroll report.
    ///
    /// # Returns
    /// `true` if the offset was moved
    pub fn did_end_decelerating(&mut self) -> bool {
        if !self.phase.begin_recenter() {
            return false;
        }

        let mut moved = false;
        if self.geometry.mode() == ScrollMode::Infinite {
            moved = self.recenter_silently();
        }
        self.phase.finish();
        moved
    }

    /// The user tapped `row`. Scrolls it to the centre and selects its item.
    pub fn did_select_row(&mut self, row: usize) -> Option<WheelSelection> {
        let Some(item) = self.item_at_row(row) else {
            tracing::warn!("tap on row {} past the end of wheel {}", row, self.component.position);
            return None;
        };

        let current = self.widget.content_offset();
        let offset = self.geometry.offset_centering_row(row, self.widget.visible_height());
        self.widget.set_content_offset(offset, true);
        self.selected_item = item;

        Some(WheelSelection {
            item,
            row,
            direction: direction_between(current, offset),
            offset,
        })
    }

    // ===== Programmatic selection =====

    /// Scrolls `item` to the centre.
    ///
    /// # Returns
    /// `false` if `item` is out of range and nothing happened
    pub fn set_selected_item(&mut self, item: usize, animated: bool) -> bool {
        if item >= self.geometry.item_count() {
            tracing::warn!(
                "item {} out of range for wheel {} ({} items)",
                item,
                self.component.position,
                self.geometry.item_count()
            );
            return false;
        }
        self.center_on(item, animated);
        true
    }

    /// Moves the selection by `delta` items, wrapping at either end.
    pub fn step_selection(&mut self, delta: isize) -> Option<WheelSelection> {
        let count = self.geometry.item_count();
        if count == 0 || delta == 0 {
            return None;
        }

        let count = count as isize;
        let item = (self.selected_item as isize + delta.rem_euclid(count)).rem_euclid(count) as usize;
        let current = self.widget.content_offset();
        let offset = self.center_on(item, true);
        let row = self
            .geometry
            .row_at_offset(offset + self.widget.visible_height() * 0.5)
            .unwrap_or(0);

        Some(WheelSelection {
            item,
            row,
            direction: direction_between(current, offset),
            offset,
        })
    }

    /// The visible height changed; keeps the selected item centred.
    pub fn layout_changed(&mut self) {
        self.center_on(self.selected_item, false);
    }

    /// Replaces the item count, clamping the selection into the new range.
    ///
    /// # Returns
    /// The selected item after clamping
    pub fn set_item_count(&mut self, item_count: usize) -> usize {
        self.geometry = ScrollGeometry::new(item_count, self.geometry.mode(), self.geometry.row_height());
        self.widget
            .reload_rows(self.geometry.total_rows(), self.geometry.row_height());
        self.phase.reset();
        self.silent_offset = None;

        let item = self.selected_item.min(item_count.saturating_sub(1));
        self.center_on(item, false);
        item
    }

    fn recenter_silently(&mut self) -> bool {
        let current = self.widget.content_offset();
        let primary = self.geometry.primary_offset(current);
        if (primary - current).abs() < f64::EPSILON {
            return false;
        }
        tracing::trace!(
            "wheel {} re-centred {:.1} -> {:.1}",
            self.component.position,
            current,
            primary
        );
        self.silent_offset = Some(primary);
        self.widget.set_content_offset(primary, false);
        true
    }

    fn center_on(&mut self, item: usize, animated: bool) -> f64 {
        if self.geometry.mode() == ScrollMode::Infinite {
            self.recenter_silently();
        }
        let offset = self.geometry.offset_centering_item(
            item,
            self.widget.content_offset(),
            self.widget.visible_height(),
        );
        self.widget.set_content_offset(offset, animated);
        self.selected_item = item;
        offset
    }
}

fn direction_between(from: f64, to: f64) -> ScrollDirection {
    if to < from {
        ScrollDirection::Up
    } else {
        ScrollDirection::Down
    }
}
