//! Domain logic for the picker wheels.
//!
//! This module contains stateless geometry:
//! - Infinite scroll operations (row/item mapping, snapping, re-centering)

pub mod infinite_scroll;

pub use infinite_scroll::{ScrollDirection, ScrollGeometry, ScrollMode, Snap};
