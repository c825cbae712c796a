//! Wheel kinds and their left-to-right layout.
//!
//! - `unit`: the closed set of wheel kinds and their field mappings
//! - `layout`: deriving the ordered wheel list from a concrete pattern

mod layout;
mod unit;

pub use layout::layout;
pub use unit::{CalendarField, ComponentUnit, PartialFields, PickerComponent};
