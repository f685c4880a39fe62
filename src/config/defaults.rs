// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Transform Defaults
// ==========================================================================

/// Default scale applied to a freshly bound image (1.0 = original size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed image scale.
pub const MIN_SCALE: f32 = 0.1;

/// Maximum allowed image scale.
pub const MAX_SCALE: f32 = 5.0;

/// Multiplier applied to the scale for one scroll-up wheel step.
pub const DEFAULT_ZOOM_IN_FACTOR: f32 = 1.1;

/// Multiplier applied to the scale for one scroll-down wheel step.
pub const DEFAULT_ZOOM_OUT_FACTOR: f32 = 0.9;

// ==========================================================================
// Editor Canvas Defaults
// ==========================================================================

/// Fixed height of the placement editor canvas, in logical pixels.
pub const EDITOR_HEIGHT: f32 = 300.0;

/// Half-length of each crosshair arm, in logical pixels.
pub const CROSSHAIR_ARM: f32 = 20.0;

/// On-screen preview factor applied to the physical badge radius.
pub const GUIDE_PREVIEW_FACTOR: f32 = 0.5;

/// Guide radius as a fraction of the smaller canvas dimension, used when
/// no physical badge size is configured.
pub const GUIDE_RELATIVE_FRACTION: f32 = 0.4;

/// Upper bound on the guide radius as a fraction of the smaller canvas
/// dimension, so a large physical badge still fits the preview.
pub const GUIDE_MAX_CANVAS_FRACTION: f32 = 0.45;

// ==========================================================================
// Badge Defaults
// ==========================================================================

/// Default badge diameter in millimeters (standard 58 mm button press).
pub const DEFAULT_DIAMETER_MM: f32 = 58.0;

/// Minimum badge diameter in millimeters.
pub const MIN_DIAMETER_MM: f32 = 10.0;

/// Maximum badge diameter in millimeters.
pub const MAX_DIAMETER_MM: f32 = 200.0;

/// Default export resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 300;

/// Minimum export resolution in dots per inch.
pub const MIN_DPI: u32 = 72;

/// Maximum export resolution in dots per inch.
pub const MAX_DPI: u32 = 600;

// ==========================================================================
// Sheet Defaults
// ==========================================================================

/// A4 page width in millimeters.
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 page height in millimeters.
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Default gap between neighboring badges on a sheet, in millimeters.
pub const DEFAULT_SPACING_MM: f32 = 5.0;

/// Default unprintable page margin, in millimeters.
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(DEFAULT_ZOOM_IN_FACTOR > 1.0);
    assert!(DEFAULT_ZOOM_OUT_FACTOR < 1.0);
    assert!(DEFAULT_ZOOM_OUT_FACTOR > 0.0);

    assert!(EDITOR_HEIGHT > 0.0);
    assert!(GUIDE_PREVIEW_FACTOR > 0.0);
    assert!(GUIDE_RELATIVE_FRACTION > 0.0);
    assert!(GUIDE_MAX_CANVAS_FRACTION < 0.5);

    assert!(MIN_DIAMETER_MM > 0.0);
    assert!(MIN_DIAMETER_MM <= DEFAULT_DIAMETER_MM);
    assert!(DEFAULT_DIAMETER_MM <= MAX_DIAMETER_MM);
    assert!(MIN_DPI > 0);
    assert!(MIN_DPI <= DEFAULT_DPI);
    assert!(DEFAULT_DPI <= MAX_DPI);

    assert!(A4_WIDTH_MM < A4_HEIGHT_MM);
    assert!(DEFAULT_SPACING_MM >= 0.0);
    assert!(DEFAULT_MARGIN_MM >= 0.0);
};
