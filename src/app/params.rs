// SPDX-License-Identifier: MPL-2.0
//! The host-owned parameter fields mirrored by the editor.
//!
//! These are the values a downstream pipeline would consume; the editor
//! writes them through the [`SyncTarget`] seam and never reads them back
//! during gestures.

use crate::config::defaults::DEFAULT_SCALE;
use crate::ui::editor::{sync, ParamValue, SyncTarget};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeParams {
    pub scale: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for NodeParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl SyncTarget for NodeParams {
    fn write(&mut self, field: &str, value: ParamValue) -> bool {
        match (field, value) {
            (sync::SCALE_FIELD, ParamValue::Float(v)) => {
                self.scale = v;
                true
            }
            (sync::OFFSET_X_FIELD, ParamValue::Int(v)) => {
                self.offset_x = v;
                true
            }
            (sync::OFFSET_Y_FIELD, ParamValue::Int(v)) => {
                self.offset_y = v;
                true
            }
            _ => false,
        }
    }
}
