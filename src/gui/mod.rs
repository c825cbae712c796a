//! Demo host for the picker.
//!
//! - `egui_wheel`: the egui scroll widget backing one wheel
//! - `picker_panel`: wheel rendering and gesture forwarding
//! - `controls`: locale, clock and action controls
//! - `event_log`: observer output shown in the window
//! - `settings`: persisted demo choices

pub mod controls;
pub mod egui_wheel;
pub mod event_log;
pub mod picker_panel;
pub mod settings;
