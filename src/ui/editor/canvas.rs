// SPDX-License-Identifier: MPL-2.0
//! Canvas widget for the placement editor.
//!
//! Translates raw iced events into [`GestureEvent`]s (capturing only what
//! the state machine will consume) and renders the frame: background,
//! transformed image, fixed guides, and the live status readout.
#![allow(clippy::cast_precision_loss)]

use super::state::{GestureEvent, TransformState};
use super::{Editor, GuideGeometry};
use crate::config::defaults::CROSSHAIR_ARM;
use crate::media::ImageData;
use crate::ui::theme;
use iced::widget::canvas;
use iced::{alignment, mouse, Point, Rectangle, Size};
use log::warn;

/// Lines of wheel movement per scroll "click" reported by some backends as
/// pixel deltas; only the sign matters for zoom direction.
fn wheel_delta(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
    }
}

/// Renderer-independent layout of one frame: a pure function of the
/// transform, the bound image dimensions, and the region, so unchanged
/// inputs always describe the identical frame.
#[derive(Debug, Clone, PartialEq)]
struct FrameLayout {
    /// Destination rectangle of the placed image; `None` when no image is
    /// bound or its dimensions are empty.
    image_rect: Option<Rectangle>,
    /// Whether the "connect an image" captions are shown.
    show_caption: bool,
    guide_radius: f32,
    status: String,
}

fn frame_layout(
    transform: &TransformState,
    image_size: Option<(u32, u32)>,
    guide: GuideGeometry,
    region: Size,
) -> FrameLayout {
    let center = Point::new(region.width / 2.0, region.height / 2.0);
    let image_rect = match image_size {
        Some((w, h)) if w > 0 && h > 0 => {
            let width = w as f32 * transform.scale;
            let height = h as f32 * transform.scale;
            let top_left = Point::new(
                center.x + transform.offset_x - width / 2.0,
                center.y + transform.offset_y - height / 2.0,
            );
            Some(Rectangle::new(top_left, Size::new(width, height)))
        }
        _ => None,
    };

    FrameLayout {
        image_rect,
        show_caption: image_size.is_none(),
        guide_radius: guide.radius(region),
        status: format!(
            "scale: {:.2}x | offset: ({}, {})",
            transform.scale,
            super::sync::rounded_offset(transform.offset_x),
            super::sync::rounded_offset(transform.offset_y),
        ),
    }
}

/// Canvas program rendering one placement editor.
pub struct PlacementCanvas<'a, Message> {
    editor: &'a Editor,
    image: Option<&'a ImageData>,
    guide: GuideGeometry,
    on_gesture: fn(GestureEvent, Size) -> Message,
}

impl<'a, Message> PlacementCanvas<'a, Message> {
    pub fn new(
        editor: &'a Editor,
        image: Option<&'a ImageData>,
        guide: GuideGeometry,
        on_gesture: fn(GestureEvent, Size) -> Message,
    ) -> Self {
        Self {
            editor,
            image,
            guide,
            on_gesture,
        }
    }

    fn publish(
        &self,
        event: GestureEvent,
        bounds: Rectangle,
    ) -> Option<iced::widget::Action<Message>> {
        Some(iced::widget::Action::publish((self.on_gesture)(event, bounds.size())).and_capture())
    }

    /// Cursor position in canvas-local coordinates, even outside the bounds.
    fn local_cursor(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
        cursor
            .position()
            .map(|p| Point::new(p.x - bounds.x, p.y - bounds.y))
    }
}

impl<Message> canvas::Program<Message> for PlacementCanvas<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    return self.publish(GestureEvent::PointerDown(position), bounds);
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // An in-progress drag follows the pointer past the bounds;
                // otherwise moves are left to other widgets.
                if self.editor.is_dragging() {
                    if let Some(position) = Self::local_cursor(cursor, bounds) {
                        return self.publish(GestureEvent::PointerMove(position), bounds);
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.editor.is_dragging() {
                    let position =
                        Self::local_cursor(cursor, bounds).unwrap_or(Point::ORIGIN);
                    return self.publish(GestureEvent::PointerUp(position), bounds);
                }
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if let Some(position) = cursor.position_in(bounds) {
                    return self.publish(
                        GestureEvent::Wheel {
                            position,
                            delta: wheel_delta(*delta),
                        },
                        bounds,
                    );
                }
            }
            iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                if let iced::keyboard::Key::Character(c) = key {
                    // Hover is the focus proxy for the reset shortcut.
                    if c.as_str().eq_ignore_ascii_case("r") && cursor.is_over(bounds) {
                        return self.publish(GestureEvent::Reset, bounds);
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        use canvas::{Frame, Path, Stroke, Text};

        let mut frame = Frame::new(renderer, bounds.size());
        let size = frame.size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);

        frame.fill_rectangle(Point::ORIGIN, size, theme::editor_background());
        frame.stroke(
            &Path::rectangle(Point::ORIGIN, size),
            Stroke::default()
                .with_width(2.0)
                .with_color(theme::editor_border()),
        );

        let layout = frame_layout(
            self.editor.transform(),
            self.image.map(|image| (image.width, image.height)),
            self.guide,
            size,
        );

        match (self.image, layout.image_rect) {
            (Some(image), Some(rect)) => {
                frame.draw_image(rect, canvas::Image::new(image.handle.clone()));
            }
            (Some(image), None) => {
                warn!(
                    "image resource has empty dimensions ({}x{}); skipping draw",
                    image.width, image.height
                );
            }
            (None, _) => {}
        }

        if layout.show_caption {
            frame.fill_text(Text {
                content: "Connect an image to begin".to_string(),
                position: Point::new(center.x, center.y - 10.0),
                color: theme::caption_color(),
                size: 14.0.into(),
                align_x: iced::widget::text::Alignment::Center,
                align_y: alignment::Vertical::Center,
                ..Text::default()
            });
            frame.fill_text(Text {
                content: "Drag to move | Scroll to zoom | R to reset".to_string(),
                position: Point::new(center.x, center.y + 14.0),
                color: theme::hint_color(),
                size: 12.0.into(),
                align_x: iced::widget::text::Alignment::Center,
                align_y: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        // Guides stay anchored at the untransformed center.
        if layout.guide_radius > 0.0 {
            frame.stroke(
                &Path::circle(center, layout.guide_radius),
                Stroke::default()
                    .with_width(2.0)
                    .with_color(theme::guide_circle_color()),
            );
        }
        let crosshair_stroke = Stroke::default()
            .with_width(1.0)
            .with_color(theme::crosshair_color());
        frame.stroke(
            &Path::line(
                Point::new(center.x - CROSSHAIR_ARM, center.y),
                Point::new(center.x + CROSSHAIR_ARM, center.y),
            ),
            crosshair_stroke,
        );
        frame.stroke(
            &Path::line(
                Point::new(center.x, center.y - CROSSHAIR_ARM),
                Point::new(center.x, center.y + CROSSHAIR_ARM),
            ),
            crosshair_stroke,
        );

        frame.fill_text(Text {
            content: layout.status,
            position: Point::new(8.0, size.height - 20.0),
            color: theme::status_text_color(),
            size: 12.0.into(),
            font: iced::Font::MONOSPACE,
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}
