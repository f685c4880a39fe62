// SPDX-License-Identifier: MPL-2.0
//! The placement editor: a canvas widget in which the bound image is panned
//! and zoomed inside fixed circular/crosshair guides.
//!
//! Layering:
//! - [`state`] holds the pure gesture state machine,
//! - [`sync`] defines the parameter write-through boundary,
//! - [`guide`] derives the overlay geometry,
//! - [`canvas`] renders frames and translates raw iced events.
//!
//! [`Editor`] ties the first two together and guarantees exactly one
//! synchronous parameter write per mutating gesture.

pub mod canvas;
pub mod guide;
pub mod state;
pub mod sync;

pub use canvas::PlacementCanvas;
pub use guide::GuideGeometry;
pub use state::{GestureEvent, Outcome, Status, StepFactors, TransformState};
pub use sync::{ParamValue, SyncTarget};

use iced::Size;

use crate::config::defaults::EDITOR_HEIGHT;

/// Owns the transform state and the configured wheel step factors.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    transform: TransformState,
    factors: StepFactors,
}

impl Editor {
    pub fn new(factors: StepFactors) -> Self {
        Self {
            transform: TransformState::default(),
            factors,
        }
    }

    /// Builds an editor that adopts externally stored parameter values.
    /// Used when an image is (re)bound, so the fields keep their meaning
    /// across attachments.
    pub fn with_params(factors: StepFactors, scale: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            transform: TransformState::from_params(scale, offset_x, offset_y),
            factors,
        }
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.transform.is_dragging()
    }

    /// Applies one gesture and, if it mutated the transform, performs the
    /// single synchronous write-through to the parameter fields.
    pub fn apply(
        &mut self,
        event: GestureEvent,
        region: Size,
        params: &mut dyn SyncTarget,
    ) -> Status {
        let outcome = self.transform.handle(event, self.factors, region);
        if outcome.mutated {
            sync::push(&self.transform, params);
        }
        outcome.status
    }

    /// Restores the identity transform and syncs it.
    pub fn reset(&mut self, params: &mut dyn SyncTarget) {
        self.apply(GestureEvent::Reset, Size::ZERO, params);
    }

    /// The editor requests a fixed height regardless of available width.
    #[must_use]
    pub fn preferred_height() -> f32 {
        EDITOR_HEIGHT
    }
}
