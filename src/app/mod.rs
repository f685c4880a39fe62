// SPDX-License-Identifier: MPL-2.0
//! Application shell hosting the placement editor.
//!
//! Owns the parameter fields the editor mirrors, binds images picked through
//! the file dialog, and drives the badge/sheet export pipeline.

pub mod params;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::media::badge::{self, BadgeSpec};
use crate::media::sheet::{self, Arrangement, SheetSpec};
use crate::media::{self, ImageData};
use crate::ui::editor::{Editor, GestureEvent, GuideGeometry, PlacementCanvas, StepFactors};
use iced::widget::{button, column, container, pick_list, row, text, Canvas};
use iced::{window, Element, Length, Size, Task, Theme};
use log::warn;
use params::NodeParams;
use std::path::PathBuf;

const ARRANGEMENTS: [Arrangement; 2] = [Arrangement::Grid, Arrangement::Compact];

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Startup parameters from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub image_path: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A gesture from the editor canvas, with the hit region of that frame.
    Editor(GestureEvent, Size),
    OpenImagePressed,
    ImagePicked(Option<PathBuf>),
    ImageLoaded {
        generation: u64,
        result: Result<ImageData>,
    },
    AutoFitPressed,
    ResetPressed,
    ArrangementSelected(Arrangement),
    ExportBadgePressed,
    BadgeTargetPicked(Option<PathBuf>),
    ExportSheetPressed,
    SheetTargetPicked(Option<PathBuf>),
}

#[derive(Debug)]
pub struct App {
    config: Config,
    editor: Editor,
    params: NodeParams,
    image: Option<ImageData>,
    image_path: Option<PathBuf>,
    /// Incremented for every load request; completions carrying an older
    /// generation are discarded.
    load_generation: u64,
    /// Where preference changes are persisted; `None` when the platform has
    /// no configuration directory.
    config_path: Option<PathBuf>,
    status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            editor: Editor::default(),
            params: NodeParams::default(),
            image: None,
            image_path: None,
            load_generation: 0,
            config_path: None,
            status: None,
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

async fn pick_image_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn pick_save_target(file_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name(file_name)
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            warn!("failed to load configuration: {error}");
            Config::default()
        });

        let mut app = App {
            editor: Editor::new(StepFactors {
                zoom_in: config.zoom_in_factor(),
                zoom_out: config.zoom_out_factor(),
            }),
            config,
            config_path: config::default_path(),
            ..Self::default()
        };

        let task = if let Some(path_str) = flags.image_path {
            app.begin_image_load(PathBuf::from(path_str))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self
            .image_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => format!("{name} - Badge Studio"),
            None => "Badge Studio".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn step_factors(&self) -> StepFactors {
        StepFactors {
            zoom_in: self.config.zoom_in_factor(),
            zoom_out: self.config.zoom_out_factor(),
        }
    }

    fn guide(&self) -> GuideGeometry {
        GuideGeometry::from_badge(self.config.diameter_mm(), self.config.dpi())
    }

    fn badge_spec(&self) -> BadgeSpec {
        BadgeSpec {
            diameter_mm: self.config.diameter_mm(),
            dpi: self.config.dpi(),
            scale: self.params.scale,
            offset_x: self.params.offset_x,
            offset_y: self.params.offset_y,
        }
    }

    /// Rebuilds the editor so it adopts the current parameter values.
    /// Called whenever an image is (re)bound or the host rewrites the fields.
    #[allow(clippy::cast_precision_loss)]
    fn reattach_editor(&mut self) {
        self.editor = Editor::with_params(
            self.step_factors(),
            self.params.scale,
            self.params.offset_x as f32,
            self.params.offset_y as f32,
        );
    }

    /// Writes the current preferences back to disk. Failures are logged;
    /// a broken settings file must not interrupt editing.
    fn persist_config(&self) {
        if let Some(path) = &self.config_path {
            if let Err(error) = config::save_to_path(&self.config, path) {
                warn!("failed to save configuration: {error}");
            }
        }
    }

    fn begin_image_load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_generation += 1;
        let generation = self.load_generation;
        self.image_path = Some(path.clone());
        Task::perform(async move { media::load_image(&path) }, move |result| {
            Message::ImageLoaded { generation, result }
        })
    }

    fn render_current_badge(&self) -> Result<image_rs::RgbaImage> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| Error::Param("no image bound".into()))?;
        let source = image.to_rgba_image()?;
        badge::render_badge(&source, &self.badge_spec())
    }

    fn export_badge(&self, path: &PathBuf) -> Result<()> {
        let rendered = self.render_current_badge()?;
        rendered.save(path)?;
        Ok(())
    }

    fn export_sheet(&self, path: &PathBuf) -> Result<()> {
        let rendered = self.render_current_badge()?;
        let spec = SheetSpec {
            diameter_mm: self.config.diameter_mm(),
            dpi: self.config.dpi(),
            arrangement: self.config.arrangement(),
            ..SheetSpec::default()
        };
        let page = sheet::render_sheet(std::slice::from_ref(&rendered), &spec)?;
        page.save(path)?;
        Ok(())
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(event, region) => {
                self.editor.apply(event, region, &mut self.params);
                Task::none()
            }
            Message::OpenImagePressed => Task::perform(pick_image_file(), Message::ImagePicked),
            Message::ImagePicked(Some(path)) => self.begin_image_load(path),
            Message::ImagePicked(None) => Task::none(),
            Message::ImageLoaded { generation, result } => {
                if generation != self.load_generation {
                    warn!("discarding stale image load result (generation {generation})");
                    return Task::none();
                }
                match result {
                    Ok(image) => {
                        self.reattach_editor();
                        self.status = Some(format!("Loaded {}x{} image", image.width, image.height));
                        self.image = Some(image);
                    }
                    Err(error) => {
                        warn!("image load failed: {error}");
                        self.status = Some(format!("Load failed: {error}"));
                    }
                }
                Task::none()
            }
            Message::AutoFitPressed => {
                if let Some(image) = &self.image {
                    let diameter = self.badge_spec().diameter_px();
                    self.params.scale = badge::auto_fit_scale(image.width, image.height, diameter);
                    self.params.offset_x = 0;
                    self.params.offset_y = 0;
                    self.reattach_editor();
                    self.status = Some(format!("Auto fit: scale {:.2}", self.params.scale));
                }
                Task::none()
            }
            Message::ResetPressed => {
                self.editor.reset(&mut self.params);
                Task::none()
            }
            Message::ArrangementSelected(arrangement) => {
                self.config.arrangement = Some(arrangement);
                self.persist_config();
                Task::none()
            }
            Message::ExportBadgePressed => {
                if self.image.is_some() {
                    Task::perform(
                        pick_save_target("badge.png".to_string()),
                        Message::BadgeTargetPicked,
                    )
                } else {
                    Task::none()
                }
            }
            Message::BadgeTargetPicked(Some(path)) => {
                self.status = Some(match self.export_badge(&path) {
                    Ok(()) => format!("Badge saved to {}", path.display()),
                    Err(error) => {
                        warn!("badge export failed: {error}");
                        format!("Badge export failed: {error}")
                    }
                });
                Task::none()
            }
            Message::ExportSheetPressed => {
                if self.image.is_some() {
                    Task::perform(
                        pick_save_target("sheet.png".to_string()),
                        Message::SheetTargetPicked,
                    )
                } else {
                    Task::none()
                }
            }
            Message::SheetTargetPicked(Some(path)) => {
                self.status = Some(match self.export_sheet(&path) {
                    Ok(()) => format!("Sheet saved to {}", path.display()),
                    Err(error) => {
                        warn!("sheet export failed: {error}");
                        format!("Sheet export failed: {error}")
                    }
                });
                Task::none()
            }
            Message::BadgeTargetPicked(None) | Message::SheetTargetPicked(None) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let has_image = self.image.is_some();

        let toolbar = row![
            button(text("Open image...").size(14)).on_press(Message::OpenImagePressed),
            button(text("Auto fit").size(14))
                .on_press_maybe(has_image.then_some(Message::AutoFitPressed)),
            button(text("Reset").size(14)).on_press(Message::ResetPressed),
            pick_list(
                ARRANGEMENTS,
                Some(self.config.arrangement()),
                Message::ArrangementSelected
            )
            .text_size(14),
            button(text("Export badge...").size(14))
                .on_press_maybe(has_image.then_some(Message::ExportBadgePressed)),
            button(text("Export sheet...").size(14))
                .on_press_maybe(has_image.then_some(Message::ExportSheetPressed)),
        ]
        .spacing(8);

        let editor_canvas = Canvas::new(PlacementCanvas::new(
            &self.editor,
            self.image.as_ref(),
            self.guide(),
            Message::Editor,
        ))
        .width(Length::Fill)
        .height(Length::Fixed(Editor::preferred_height()));

        let params_line = text(format!(
            "scale = {:.2} | offset_x = {} | offset_y = {} | badge {} mm @ {} dpi",
            self.params.scale,
            self.params.offset_x,
            self.params.offset_y,
            self.config.diameter_mm(),
            self.config.dpi(),
        ))
        .size(13);

        let status_line = text(self.status.clone().unwrap_or_default()).size(13);

        container(
            column![toolbar, editor_canvas, params_line, status_line]
                .spacing(12)
                .padding(16),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
