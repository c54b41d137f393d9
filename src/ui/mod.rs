// SPDX-License-Identifier: MPL-2.0
//! User interface modules for the lightbox component.

pub mod design_tokens;
pub mod lightbox;
pub mod styles;
