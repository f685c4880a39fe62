// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod editor;
pub mod theme;
