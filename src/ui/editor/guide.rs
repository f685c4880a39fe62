// SPDX-License-Identifier: MPL-2.0
//! Geometry of the fixed placement guides (boundary circle and crosshair).

use crate::config::defaults::{
    GUIDE_MAX_CANVAS_FRACTION, GUIDE_PREVIEW_FACTOR, GUIDE_RELATIVE_FRACTION,
};
use crate::media::badge::mm_to_px;
use iced::Size;

/// How the boundary circle radius is derived from the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideGeometry {
    /// Radius from the physical badge size, shown at a preview factor and
    /// capped so the circle always fits the canvas.
    Physical { diameter_mm: f32, dpi: u32 },
    /// Radius as a fraction of the smaller canvas dimension.
    Relative(f32),
}

impl Default for GuideGeometry {
    fn default() -> Self {
        Self::Relative(GUIDE_RELATIVE_FRACTION)
    }
}

impl GuideGeometry {
    pub fn from_badge(diameter_mm: f32, dpi: u32) -> Self {
        Self::Physical { diameter_mm, dpi }
    }

    /// Boundary circle radius in canvas pixels for the given region.
    #[allow(clippy::cast_precision_loss)]
    pub fn radius(&self, region: Size) -> f32 {
        let shorter = region.width.min(region.height).max(0.0);
        match *self {
            Self::Physical { diameter_mm, dpi } => {
                let physical = mm_to_px(diameter_mm, dpi) as f32 / 2.0 * GUIDE_PREVIEW_FACTOR;
                physical.min(shorter * GUIDE_MAX_CANVAS_FRACTION)
            }
            Self::Relative(fraction) => shorter * fraction,
        }
    }
}
