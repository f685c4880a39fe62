// SPDX-License-Identifier: MPL-2.0
//! Pure gesture state machine for the placement editor.
//!
//! Translates pointer, wheel, and reset events into an affine transform
//! (uniform scale plus pixel offsets). No iced widget code lives here, which
//! keeps the transitions directly testable.

use crate::config::defaults::{
    DEFAULT_SCALE, DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR, MAX_SCALE, MIN_SCALE,
};
use iced::{Point, Size};

/// Wheel multipliers for one zoom step in each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepFactors {
    pub zoom_in: f32,
    pub zoom_out: f32,
}

impl Default for StepFactors {
    fn default() -> Self {
        Self {
            zoom_in: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out: DEFAULT_ZOOM_OUT_FACTOR,
        }
    }
}

/// A gesture delivered to the editor, positioned in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    /// `delta` is the vertical wheel amount; positive scrolls up (zoom in),
    /// negative scrolls down (zoom out).
    Wheel { position: Point, delta: f32 },
    Reset,
}

/// Whether the editor consumed the event or left it for other widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Captured,
    Ignored,
}

/// Result of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    /// True when the synchronized transform values changed and the external
    /// parameter fields must be written.
    pub mutated: bool,
}

impl Outcome {
    fn ignored() -> Self {
        Self {
            status: Status::Ignored,
            mutated: false,
        }
    }

    fn captured(mutated: bool) -> Self {
        Self {
            status: Status::Captured,
            mutated,
        }
    }
}

/// The editable transform plus the in-progress drag bookkeeping.
///
/// `offset_x`/`offset_y` keep full f32 precision; rounding for external
/// consumers happens only at the synchronization boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    dragging: bool,
    last_pointer: Point,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
            dragging: false,
            last_pointer: Point::ORIGIN,
        }
    }
}

impl TransformState {
    /// Builds a state from externally stored parameter values, clamping the
    /// scale into the editable range.
    pub fn from_params(scale: f32, offset_x: f32, offset_y: f32) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            DEFAULT_SCALE
        };
        Self {
            scale,
            offset_x,
            offset_y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies one gesture against the hit region supplied for this frame.
    ///
    /// The region is `[0, width] x [0, height]` in local coordinates and is
    /// re-evaluated on every call, never cached.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, event: GestureEvent, factors: StepFactors, region: Size) -> Outcome {
        match event {
            GestureEvent::PointerDown(position) => {
                if self.dragging || !contains(region, position) {
                    return Outcome::ignored();
                }
                self.dragging = true;
                self.last_pointer = position;
                Outcome::captured(false)
            }
            GestureEvent::PointerMove(position) => {
                if !self.dragging {
                    return Outcome::ignored();
                }
                // An active drag follows the pointer even outside the region.
                self.offset_x += position.x - self.last_pointer.x;
                self.offset_y += position.y - self.last_pointer.y;
                self.last_pointer = position;
                Outcome::captured(true)
            }
            GestureEvent::PointerUp(_) => {
                if !self.dragging {
                    return Outcome::ignored();
                }
                self.dragging = false;
                Outcome::captured(false)
            }
            GestureEvent::Wheel { position, delta } => {
                if !contains(region, position) {
                    return Outcome::ignored();
                }
                if delta == 0.0 {
                    return Outcome::captured(false);
                }
                let factor = if delta > 0.0 {
                    factors.zoom_in
                } else {
                    factors.zoom_out
                };
                self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
                Outcome::captured(true)
            }
            GestureEvent::Reset => {
                self.scale = DEFAULT_SCALE;
                self.offset_x = 0.0;
                self.offset_y = 0.0;
                Outcome::captured(true)
            }
        }
    }
}

fn contains(region: Size, position: Point) -> bool {
    position.x >= 0.0
        && position.x <= region.width
        && position.y >= 0.0
        && position.y <= region.height
}
