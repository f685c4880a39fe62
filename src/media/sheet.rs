// SPDX-License-Identifier: MPL-2.0
//! A4 print-sheet layout: places circular badges in a grid or a hex-packed
//! compact arrangement, with placeholder circles for unfilled positions.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::config::defaults::{
    A4_HEIGHT_MM, A4_WIDTH_MM, DEFAULT_DIAMETER_MM, DEFAULT_DPI, DEFAULT_MARGIN_MM,
    DEFAULT_SPACING_MM,
};
use crate::error::{Error, Result};
use crate::media::badge::mm_to_px;
use image_rs::imageops::FilterType;
use image_rs::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

const PAGE_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const MARGIN_OUTLINE: Rgba<u8> = Rgba([200, 200, 200, 255]);
const PLACEHOLDER_FILL: Rgba<u8> = Rgba([220, 220, 220, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Rectangular rows and columns, centered on the printable area.
    Grid,
    /// Hex-packed columns, alternate columns shifted by half a step.
    Compact,
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arrangement::Grid => write!(f, "Grid"),
            Arrangement::Compact => write!(f, "Compact"),
        }
    }
}

/// Physical layout parameters for one A4 sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSpec {
    pub diameter_mm: f32,
    pub dpi: u32,
    pub arrangement: Arrangement,
    pub spacing_mm: f32,
    pub margin_mm: f32,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            diameter_mm: DEFAULT_DIAMETER_MM,
            dpi: DEFAULT_DPI,
            arrangement: Arrangement::Grid,
            spacing_mm: DEFAULT_SPACING_MM,
            margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

impl SheetSpec {
    pub fn page_size_px(&self) -> (u32, u32) {
        (
            mm_to_px(A4_WIDTH_MM, self.dpi),
            mm_to_px(A4_HEIGHT_MM, self.dpi),
        )
    }

    pub fn diameter_px(&self) -> u32 {
        mm_to_px(self.diameter_mm, self.dpi)
    }
}

/// Badge center positions on the page, in pixels.
pub fn positions(spec: &SheetSpec) -> Vec<(i64, i64)> {
    let (page_w, page_h) = spec.page_size_px();
    let diameter = i64::from(spec.diameter_px());
    if diameter == 0 {
        return Vec::new();
    }
    let radius = diameter / 2;
    let spacing = i64::from(mm_to_px(spec.spacing_mm, spec.dpi));
    let margin = i64::from(mm_to_px(spec.margin_mm, spec.dpi));

    match spec.arrangement {
        Arrangement::Grid => grid_positions(
            i64::from(page_w),
            i64::from(page_h),
            diameter,
            radius,
            spacing,
            margin,
        ),
        Arrangement::Compact => compact_positions(
            i64::from(page_w),
            i64::from(page_h),
            diameter,
            radius,
            spacing,
            margin,
        ),
    }
}

fn grid_positions(
    page_w: i64,
    page_h: i64,
    diameter: i64,
    radius: i64,
    spacing: i64,
    margin: i64,
) -> Vec<(i64, i64)> {
    let available_w = page_w - 2 * margin;
    let available_h = page_h - 2 * margin;
    let center_distance = diameter + spacing;

    let cols = (available_w / center_distance).max(1);
    let rows = (available_h / center_distance).max(1);

    // Center the whole block on the printable area.
    let start_x = margin as f64 + (available_w - cols * center_distance) as f64 / 2.0;
    let start_y = margin as f64 + (available_h - rows * center_distance) as f64 / 2.0;

    let mut out = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = start_x + (col * center_distance + radius) as f64;
            let y = start_y + (row * center_distance + radius) as f64;
            out.push((x as i64, y as i64));
        }
    }
    out
}

fn compact_positions(
    page_w: i64,
    page_h: i64,
    diameter: i64,
    radius: i64,
    spacing: i64,
    margin: i64,
) -> Vec<(i64, i64)> {
    let available_w = (page_w - 2 * margin) as f64;
    let min_center_distance = (diameter + spacing) as f64;

    let horizontal_spacing = diameter as f64 * (3.0_f64.sqrt() / 2.0) + spacing as f64;
    let max_cols = (((available_w + horizontal_spacing) / horizontal_spacing) as i64).max(1);

    let vertical_spacing = (horizontal_spacing * 3.0_f64.sqrt() / 2.0).max(min_center_distance);
    let odd_col_offset = vertical_spacing / 2.0;

    let start_x = (margin + radius) as f64;

    let mut out = Vec::new();
    for col in 0..max_cols {
        let x = start_x + col as f64 * horizontal_spacing;
        if x - (radius as f64) < margin as f64 || x + radius as f64 > (page_w - margin) as f64 {
            continue;
        }
        let mut y = if col % 2 == 0 {
            (margin + radius) as f64
        } else {
            (margin + radius) as f64 + odd_col_offset
        };
        while y + radius as f64 <= (page_h - margin) as f64 {
            out.push((x as i64, y as i64));
            y += vertical_spacing;
        }
    }
    out
}

/// Renders the sheet: white A4 page with the printable margin outlined,
/// the given badges pasted at the first positions, gray placeholder circles
/// at the rest.
///
/// Badges that are not already at the sheet's pixel diameter are resampled.
///
/// # Errors
///
/// Returns [`Error::Image`] if the diameter rounds to zero pixels.
pub fn render_sheet(badges: &[RgbaImage], spec: &SheetSpec) -> Result<RgbaImage> {
    let (page_w, page_h) = spec.page_size_px();
    let diameter = spec.diameter_px();
    if diameter == 0 {
        return Err(Error::Image("badge diameter rounds to zero pixels".into()));
    }
    let radius = i64::from(diameter / 2);
    let margin = i64::from(mm_to_px(spec.margin_mm, spec.dpi));

    let mut page = RgbaImage::from_pixel(page_w, page_h, PAGE_BACKGROUND);
    draw_rect_outline(
        &mut page,
        margin,
        margin,
        i64::from(page_w) - margin,
        i64::from(page_h) - margin,
        2,
        MARGIN_OUTLINE,
    );

    let slots = positions(spec);
    let filled = badges.len().min(slots.len());

    for (badge, &(cx, cy)) in badges.iter().zip(&slots) {
        let resized;
        let tile = if badge.dimensions() == (diameter, diameter) {
            badge
        } else {
            resized = image_rs::imageops::resize(badge, diameter, diameter, FilterType::Lanczos3);
            &resized
        };
        paste(&mut page, tile, cx - radius, cy - radius);
    }

    for &(cx, cy) in &slots[filled..] {
        draw_placeholder_circle(&mut page, cx, cy, radius, PLACEHOLDER_FILL, MARGIN_OUTLINE);
    }

    Ok(page)
}

fn paste(page: &mut RgbaImage, tile: &RgbaImage, left: i64, top: i64) {
    for (x, y, px) in tile.enumerate_pixels() {
        let dx = left + i64::from(x);
        let dy = top + i64::from(y);
        if dx < 0 || dy < 0 || dx >= i64::from(page.width()) || dy >= i64::from(page.height()) {
            continue;
        }
        page.put_pixel(dx as u32, dy as u32, *px);
    }
}

fn draw_rect_outline(
    page: &mut RgbaImage,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    width: i64,
    color: Rgba<u8>,
) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            let on_edge =
                x - x0 < width || x1 - x < width || y - y0 < width || y1 - y < width;
            if !on_edge {
                continue;
            }
            if x < 0 || y < 0 || x >= i64::from(page.width()) || y >= i64::from(page.height()) {
                continue;
            }
            page.put_pixel(x as u32, y as u32, color);
        }
    }
}

fn draw_placeholder_circle(
    page: &mut RgbaImage,
    cx: i64,
    cy: i64,
    radius: i64,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let r = radius as f64;
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            if x < 0 || y < 0 || x >= i64::from(page.width()) || y >= i64::from(page.height()) {
                continue;
            }
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > r {
                continue;
            }
            let color = if r - dist <= 1.0 { outline } else { fill };
            page.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_low_dpi(arrangement: Arrangement) -> SheetSpec {
        // 72 dpi keeps the rendered page small enough for fast tests.
        SheetSpec {
            dpi: 72,
            arrangement,
            ..SheetSpec::default()
        }
    }

    #[test]
    fn page_size_matches_a4_at_300_dpi() {
        let spec = SheetSpec::default();
        assert_eq!(spec.page_size_px(), (2480, 3508));
    }

    #[test]
    fn grid_positions_fit_within_margins() {
        let spec = spec_low_dpi(Arrangement::Grid);
        let (page_w, page_h) = spec.page_size_px();
        let radius = i64::from(spec.diameter_px()) / 2;
        let margin = i64::from(mm_to_px(spec.margin_mm, spec.dpi));

        let slots = positions(&spec);
        assert!(!slots.is_empty());
        for (cx, cy) in slots {
            assert!(cx - radius >= margin - 1);
            assert!(cy - radius >= margin - 1);
            assert!(cx + radius <= i64::from(page_w) - margin + 1);
            assert!(cy + radius <= i64::from(page_h) - margin + 1);
        }
    }

    #[test]
    fn compact_positions_fit_within_margins() {
        let spec = spec_low_dpi(Arrangement::Compact);
        let (page_w, page_h) = spec.page_size_px();
        let radius = i64::from(spec.diameter_px()) / 2;
        let margin = i64::from(mm_to_px(spec.margin_mm, spec.dpi));

        let slots = positions(&spec);
        assert!(!slots.is_empty());
        for (cx, cy) in slots {
            assert!(cx - radius >= margin - 1);
            assert!(cx + radius <= i64::from(page_w) - margin + 1);
            // Column starts sit exactly on the margin; only the bottom
            // overflow is filtered during generation.
            assert!(cy + radius <= i64::from(page_h) - margin + 1);
        }
    }

    #[test]
    fn positions_are_empty_for_zero_diameter() {
        let spec = SheetSpec {
            diameter_mm: 0.0,
            ..spec_low_dpi(Arrangement::Grid)
        };
        assert!(positions(&spec).is_empty());
    }

    #[test]
    fn render_sheet_produces_a4_page() {
        let spec = spec_low_dpi(Arrangement::Grid);
        let diameter = spec.diameter_px();
        let badge = RgbaImage::from_pixel(diameter, diameter, Rgba([255, 0, 0, 255]));

        let page = render_sheet(std::slice::from_ref(&badge), &spec)
            .expect("render should succeed");
        assert_eq!(page.dimensions(), spec.page_size_px());
    }

    #[test]
    fn render_sheet_pastes_badge_and_draws_placeholders() {
        let spec = spec_low_dpi(Arrangement::Grid);
        let diameter = spec.diameter_px();
        let badge = RgbaImage::from_pixel(diameter, diameter, Rgba([255, 0, 0, 255]));

        let slots = positions(&spec);
        assert!(slots.len() >= 2, "expected room for several badges on A4");

        let page = render_sheet(std::slice::from_ref(&badge), &spec)
            .expect("render should succeed");

        let (x0, y0) = slots[0];
        assert_eq!(*page.get_pixel(x0 as u32, y0 as u32), Rgba([255, 0, 0, 255]));

        let (x1, y1) = slots[1];
        assert_eq!(*page.get_pixel(x1 as u32, y1 as u32), PLACEHOLDER_FILL);
    }

    #[test]
    fn render_sheet_resizes_mismatched_badges() {
        let spec = spec_low_dpi(Arrangement::Grid);
        let badge = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));

        let page = render_sheet(std::slice::from_ref(&badge), &spec)
            .expect("render should succeed");
        let (x0, y0) = positions(&spec)[0];
        assert_eq!(*page.get_pixel(x0 as u32, y0 as u32), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn render_sheet_rejects_zero_diameter() {
        let spec = SheetSpec {
            diameter_mm: 0.0,
            ..spec_low_dpi(Arrangement::Grid)
        };
        assert!(render_sheet(&[], &spec).is_err());
    }
}
