//! Host-facing wheel views.
//!
//! - Wheel view (one wheel's scroll callbacks on top of a host widget)

pub mod wheel_view;

pub use wheel_view::{ItemScroll, WheelSelection, WheelView};
