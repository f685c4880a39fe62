// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the placement editor and the demo shell.

use iced::Color;

/// Base palette for the editor canvas.
pub mod palette {
    use iced::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.12);
    pub const GRAY_500: Color = Color::from_rgb(0.33, 0.33, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.53, 0.53, 0.53);
    pub const GRAY_300: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const RED_400: Color = Color::from_rgb(1.0, 0.27, 0.27);
    pub const GREEN_400: Color = Color::from_rgb(0.27, 1.0, 0.27);
}

/// Flat background of the editor canvas.
pub fn editor_background() -> Color {
    palette::GRAY_900
}

/// Border stroke around the editor canvas.
pub fn editor_border() -> Color {
    palette::GRAY_500
}

/// Stroke of the badge boundary circle.
pub fn guide_circle_color() -> Color {
    palette::RED_400
}

/// Stroke of the center crosshair.
pub fn crosshair_color() -> Color {
    palette::GREEN_400
}

/// Placeholder caption shown when no image is bound.
pub fn caption_color() -> Color {
    palette::GRAY_400
}

/// Secondary hint line under the caption.
pub fn hint_color() -> Color {
    palette::GRAY_300
}

/// Live scale/offset readout in the canvas corner.
pub fn status_text_color() -> Color {
    palette::WHITE
}
