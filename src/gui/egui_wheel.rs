//! egui host widget for one wheel.
//!
//! egui has no drag-release or end-of-momentum callbacks, so `EguiWheel`
//! reconstructs them from the `ScrollArea` output every frame and reports
//! them as [`WheelGesture`]s for the panel to forward to the picker.

use std::ops::Range;

use timewheel::{ScrollWidget, WheelSpec};

/// Fraction of the remaining distance covered per animation frame.
const ANIMATION_STEP: f64 = 0.35;
/// Distance at which an animation snaps to its target.
const ANIMATION_EPSILON: f64 = 0.5;
/// Seconds of pointer velocity projected into the release offset.
const MOMENTUM_PROJECTION: f64 = 0.25;

/// A scroll callback reconstructed from frame-to-frame changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelGesture {
    Began,
    Scrolled,
    Released { velocity: f64, proposed_offset: f64 },
    Settled,
    Resized,
}

/// Scroll state of one wheel's `ScrollArea`.
#[derive(Debug, Clone)]
pub struct EguiWheel {
    width: f32,
    offset: f64,
    height: f64,
    total_rows: usize,
    row_height: f64,
    /// Offset to force on the next frame
    frame_offset: Option<f64>,
    /// Destination of an animated move
    target: Option<f64>,
    dragging: bool,
    /// Mouse-wheel scrolling happened and has not been snapped yet
    free_scrolled: bool,
}

impl EguiWheel {
    pub fn new(spec: &WheelSpec, height: f64) -> Self {
        Self {
            width: spec.width as f32,
            offset: 0.0,
            height,
            total_rows: 0,
            row_height: spec.row_height,
            frame_offset: None,
            target: None,
            dragging: false,
            free_scrolled: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Offset the `ScrollArea` must be forced to this frame, if any.
    pub fn take_frame_offset(&mut self) -> Option<f64> {
        self.frame_offset.take()
    }

    /// Reconciles the `ScrollArea` output of this frame.
    ///
    /// `held` is whether the primary button is down over the wheel and
    /// `velocity` the pointer's vertical velocity in points per second.
    pub fn update(&mut self, offset: f64, height: f64, held: bool, velocity: f64) -> Vec<WheelGesture> {
        let mut gestures = Vec::new();

        if (height - self.height).abs() > ANIMATION_EPSILON {
            self.height = height;
            gestures.push(WheelGesture::Resized);
        }

        let moved = (offset - self.offset).abs() > f64::EPSILON;
        self.offset = offset;

        if held && !self.dragging {
            self.dragging = true;
            self.target = None;
            self.free_scrolled = false;
            gestures.push(WheelGesture::Began);
        }

        if moved {
            gestures.push(WheelGesture::Scrolled);
            if !self.dragging && self.target.is_none() {
                self.free_scrolled = true;
            }
        }

        if self.dragging && !held {
            self.dragging = false;
            // dragging the content up means a negative pointer velocity
            let proposed_offset = offset - velocity * MOMENTUM_PROJECTION;
            gestures.push(WheelGesture::Released {
                velocity,
                proposed_offset,
            });
        } else if self.free_scrolled && !moved && !self.dragging {
            self.free_scrolled = false;
            gestures.push(WheelGesture::Began);
            gestures.push(WheelGesture::Released {
                velocity: 0.0,
                proposed_offset: offset,
            });
        }

        if let Some(target) = self.target {
            let remaining = target - self.offset;
            let next = if remaining.abs() < ANIMATION_EPSILON {
                target
            } else {
                self.offset + remaining * ANIMATION_STEP
            };
            self.offset = next;
            self.frame_offset = Some(next);
            gestures.push(WheelGesture::Scrolled);
            if next == target {
                self.target = None;
                gestures.push(WheelGesture::Settled);
            }
        }

        gestures
    }
}

impl ScrollWidget for EguiWheel {
    fn content_offset(&self) -> f64 {
        self.offset
    }

    fn set_content_offset(&mut self, offset: f64, animated: bool) {
        if animated {
            self.target = Some(offset);
        } else {
            self.target = None;
            self.offset = offset;
            self.frame_offset = Some(offset);
        }
    }

    fn visible_height(&self) -> f64 {
        self.height
    }

    fn visible_rows(&self) -> Range<usize> {
        if self.row_height <= 0.0 {
            return 0..0;
        }
        let first = (self.offset / self.row_height).floor().max(0.0) as usize;
        let last = ((self.offset + self.height) / self.row_height).ceil().max(0.0) as usize;
        first.min(self.total_rows)..last.min(self.total_rows)
    }

    fn reload_rows(&mut self, total_rows: usize, row_height: f64) {
        self.total_rows = total_rows;
        self.row_height = row_height;
    }
}
