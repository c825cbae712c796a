//! State management modules for the picker.
//!
//! This module contains state-only logic (no host widget concerns):
//! - Selection state (one wheel's titles and selected item)
//! - Scroll phase state (idle, dragging, decelerating, re-centering)

mod selection;
mod scroll_phase;

pub use selection::ComponentSelectionState;
pub use scroll_phase::{ScrollPhase, ScrollPhaseState};
