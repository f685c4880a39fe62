// SPDX-License-Identifier: MPL-2.0
//! Circular badge rendering and physical size conversion.
//!
//! Canvas math mixes f32 positions with u32 pixel dimensions; precision loss
//! is acceptable for print-sized bitmaps.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::config::defaults::{
    DEFAULT_DIAMETER_MM, DEFAULT_DPI, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE,
};
use crate::error::{Error, Result};
use image_rs::imageops::FilterType;
use image_rs::{Rgba, RgbaImage};

pub const MM_PER_INCH: f32 = 25.4;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Converts a physical length in millimeters to pixels at the given resolution.
pub fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * dpi as f32).round().max(0.0) as u32
}

/// Physical size and placement parameters for one badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeSpec {
    pub diameter_mm: f32,
    pub dpi: u32,
    pub scale: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            diameter_mm: DEFAULT_DIAMETER_MM,
            dpi: DEFAULT_DPI,
            scale: DEFAULT_SCALE,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl BadgeSpec {
    /// Badge diameter in pixels at the configured resolution.
    pub fn diameter_px(&self) -> u32 {
        mm_to_px(self.diameter_mm, self.dpi)
    }
}

/// Smallest scale at which the image fully covers a circle of the given
/// diameter, clamped to the editable scale range.
pub fn auto_fit_scale(width: u32, height: u32, diameter_px: u32) -> f32 {
    if width == 0 || height == 0 || diameter_px == 0 {
        return DEFAULT_SCALE;
    }
    let d = diameter_px as f32;
    (d / width as f32)
        .max(d / height as f32)
        .clamp(MIN_SCALE, MAX_SCALE)
}

/// Renders the circular badge bitmap: the source is scaled, pasted centered
/// with the given pixel offsets onto a white square, and masked to a circle.
///
/// # Errors
///
/// Returns [`Error::Image`] if the source is empty or the physical size
/// rounds to zero pixels.
pub fn render_badge(source: &RgbaImage, spec: &BadgeSpec) -> Result<RgbaImage> {
    let diameter = spec.diameter_px();
    if diameter == 0 {
        return Err(Error::Image("badge diameter rounds to zero pixels".into()));
    }
    if source.width() == 0 || source.height() == 0 {
        return Err(Error::Image("source image has empty dimensions".into()));
    }

    let scale = spec.scale.clamp(MIN_SCALE, MAX_SCALE);
    let scaled_width = ((source.width() as f32 * scale).round() as u32).max(1);
    let scaled_height = ((source.height() as f32 * scale).round() as u32).max(1);
    let scaled = if (scaled_width, scaled_height) == source.dimensions() {
        source.clone()
    } else {
        image_rs::imageops::resize(source, scaled_width, scaled_height, FilterType::Lanczos3)
    };

    let paste_x = (i64::from(diameter) - i64::from(scaled_width)) / 2 + i64::from(spec.offset_x);
    let paste_y = (i64::from(diameter) - i64::from(scaled_height)) / 2 + i64::from(spec.offset_y);

    // Pixel centers measured against the circle inscribed in the square.
    let center = (diameter as f32 - 1.0) / 2.0;
    let radius_sq = {
        let r = diameter as f32 / 2.0;
        r * r
    };

    let mut badge = RgbaImage::from_pixel(diameter, diameter, BACKGROUND);
    for (x, y, pixel) in badge.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if dx * dx + dy * dy > radius_sq {
            continue;
        }
        let sx = i64::from(x) - paste_x;
        let sy = i64::from(y) - paste_y;
        if sx < 0 || sy < 0 || sx >= i64::from(scaled_width) || sy >= i64::from(scaled_height) {
            continue;
        }
        *pixel = over_white(*scaled.get_pixel(sx as u32, sy as u32));
    }

    Ok(badge)
}

/// Composites a possibly translucent pixel over the white background.
fn over_white(px: Rgba<u8>) -> Rgba<u8> {
    let alpha = u32::from(px[3]);
    if alpha == 255 {
        return Rgba([px[0], px[1], px[2], 255]);
    }
    let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
    Rgba([blend(px[0]), blend(px[1]), blend(px[2]), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_100px() -> BadgeSpec {
        // 25.4 mm at 100 dpi is exactly 100 px.
        BadgeSpec {
            diameter_mm: 25.4,
            dpi: 100,
            ..BadgeSpec::default()
        }
    }

    #[test]
    fn mm_to_px_matches_print_sizes() {
        assert_eq!(mm_to_px(58.0, 300), 685);
        assert_eq!(mm_to_px(25.4, 300), 300);
        assert_eq!(mm_to_px(0.0, 300), 0);
    }

    #[test]
    fn auto_fit_covers_the_circle() {
        let scale = auto_fit_scale(1000, 500, 200);
        assert!((scale - 0.4).abs() < 1e-6);
        // The scaled short side equals the diameter.
        assert!((500.0 * scale - 200.0).abs() < 1e-3);
    }

    #[test]
    fn auto_fit_clamps_to_scale_range() {
        assert_eq!(auto_fit_scale(100_000, 100_000, 200), MIN_SCALE);
        assert_eq!(auto_fit_scale(10, 10, 10_000), MAX_SCALE);
    }

    #[test]
    fn auto_fit_handles_degenerate_inputs() {
        assert_eq!(auto_fit_scale(0, 100, 200), DEFAULT_SCALE);
        assert_eq!(auto_fit_scale(100, 100, 0), DEFAULT_SCALE);
    }

    #[test]
    fn render_badge_produces_square_of_diameter() {
        let source = RgbaImage::from_pixel(200, 200, Rgba([255, 0, 0, 255]));
        let badge = render_badge(&source, &spec_100px()).expect("render should succeed");
        assert_eq!(badge.dimensions(), (100, 100));
    }

    #[test]
    fn render_badge_keeps_source_inside_circle_and_white_outside() {
        let source = RgbaImage::from_pixel(200, 200, Rgba([255, 0, 0, 255]));
        let badge = render_badge(&source, &spec_100px()).expect("render should succeed");

        assert_eq!(*badge.get_pixel(50, 50), Rgba([255, 0, 0, 255]));
        // Square corners fall outside the inscribed circle.
        assert_eq!(*badge.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*badge.get_pixel(99, 99), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn render_badge_applies_offsets() {
        // 10x10 red block on a 100 px badge, pushed fully off to the right.
        let source = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let spec = BadgeSpec {
            offset_x: 200,
            ..spec_100px()
        };
        let badge = render_badge(&source, &spec).expect("render should succeed");
        assert_eq!(*badge.get_pixel(50, 50), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn render_badge_composites_translucent_pixels_over_white() {
        let source = RgbaImage::from_pixel(200, 200, Rgba([0, 0, 0, 0]));
        let badge = render_badge(&source, &spec_100px()).expect("render should succeed");
        assert_eq!(*badge.get_pixel(50, 50), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn render_badge_rejects_zero_diameter() {
        let source = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let spec = BadgeSpec {
            diameter_mm: 0.0,
            ..BadgeSpec::default()
        };
        assert!(render_badge(&source, &spec).is_err());
    }

    #[test]
    fn render_badge_rejects_empty_source() {
        let source = RgbaImage::new(0, 0);
        assert!(render_badge(&source, &spec_100px()).is_err());
    }
}
