// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a paginated full-screen image lightbox component built
//! with the Iced GUI framework.
//!
//! It displays a horizontally paging set of images inside a modal surface,
//! together with a page indicator, a close control, and a present/dismiss
//! transition that interpolates frame and backdrop opacity. The embedding
//! application supplies already-decoded image handles and a read-only style
//! configuration; decoding, loading and caching stay on the caller's side.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod config;
pub mod error;
pub mod host;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
