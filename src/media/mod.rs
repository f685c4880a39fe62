// SPDX-License-Identifier: MPL-2.0
//! Image loading and the badge export pipeline.

pub mod badge;
pub mod sheet;

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA bytes kept for the export pipeline.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Rebuilds the decoded pixel buffer for raster processing.
    ///
    /// Returns [`Error::Image`] if the stored byte length does not match the
    /// recorded dimensions.
    pub fn to_rgba_image(&self) -> Result<image_rs::RgbaImage> {
        image_rs::RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .ok_or_else(|| Error::Image("RGBA buffer does not match image dimensions".into()))
    }
}

/// Load a raster image from the given path and return its data.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// the bytes do not decode as a supported raster format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
