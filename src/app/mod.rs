//! Picker-level coordination.
//!
//! This module contains the view-model owning the wheel states and the
//! picker that ties it to one host widget per wheel.

mod picker_coordinator;
mod time_picker;

pub use picker_coordinator::{PickerCoordinator, SelectionChange, Spacer};
pub use time_picker::{RejectedObserver, TimePicker, WheelFactory, WheelSpec};
