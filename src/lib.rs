// SPDX-License-Identifier: MPL-2.0
//! `badge_studio` is an interactive badge placement editor built with the
//! Iced GUI framework.
//!
//! An image is panned and zoomed inside a fixed circular guide; the resulting
//! transform is mirrored into named numeric parameters and can be exported as
//! circular badge bitmaps or A4 print sheets.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;
