//! Gesture phase of a wheel.
//!
//! Scroll callbacks from the host widget arrive in a fixed order: a drag
//! begins, the drag is released (possibly with momentum), momentum ends and
//! the offset is quietly re-centred. This module tracks which of those steps
//! the wheel is in.

/// Phase of the current scroll gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// Resting at a content offset.
    #[default]
    Idle,
    /// The user is moving the content.
    Dragging,
    /// Momentum scrolling after a release.
    Decelerating,
    /// The offset is being moved to the primary block.
    Recentering,
}

/// State related to an ongoing scroll gesture.
///
/// Responsibilities:
/// - Tracking the gesture phase
/// - Rejecting callbacks that arrive out of order
#[derive(Debug, Clone, Default)]
pub struct ScrollPhaseState {
    phase: ScrollPhase,
}

impl ScrollPhaseState {
    pub fn new() -> Self {
        Self {
            phase: ScrollPhase::Idle,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == ScrollPhase::Dragging
    }

    /// Idle → Dragging. A new drag also interrupts momentum.
    pub fn begin_drag(&mut self) {
        self.phase = ScrollPhase::Dragging;
    }

    /// Dragging → Decelerating when the release carries velocity, else Idle.
    pub fn end_drag(&mut self, has_velocity: bool) {
        self.phase = if has_velocity {
            ScrollPhase::Decelerating
        } else {
            ScrollPhase::Idle
        };
    }

    /// Decelerating → Recentering.
    ///
    /// # Returns
    /// `false` while a drag is still in progress, in which case nothing changes
    pub fn begin_recenter(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.phase = ScrollPhase::Recentering;
        true
    }

    /// Recentering → Idle.
    pub fn finish(&mut self) {
        self.phase = ScrollPhase::Idle;
    }

    pub fn reset(&mut self) {
        self.phase = ScrollPhase::Idle;
    }
}
