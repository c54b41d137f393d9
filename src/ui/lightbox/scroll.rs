// SPDX-License-Identifier: MPL-2.0
//! Horizontally paging scroll surface: geometry, paging math and the snap
//! animation used by page-indicator taps.

use crate::config::PAGE_SNAP_DURATION;
use iced::{Rectangle, Size};
use std::time::{Duration, Instant};

/// Geometry of the paging scroll surface.
///
/// One "page" is one frame-width slot of the content area. The horizontal
/// content offset is the only scroll axis; vertical scrolling is disabled by
/// construction (content height equals frame height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagingScroll {
    frame: Rectangle,
    content_size: Size,
    offset_x: f32,
}

impl PagingScroll {
    /// Creates a scroll surface covering `frame`, sized for `page_count`
    /// pages laid out side by side.
    #[must_use]
    pub fn new(frame: Rectangle, page_count: usize) -> Self {
        let mut scroll = Self {
            frame,
            content_size: Size::ZERO,
            offset_x: 0.0,
        };
        scroll.resize(frame.size(), page_count);
        scroll
    }

    /// The surface frame in screen coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Total scrollable content size: `page_count × page_width` by height.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Width of one page slot.
    #[must_use]
    pub fn page_width(&self) -> f32 {
        self.frame.width
    }

    /// Current horizontal content offset.
    #[must_use]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Moves the content to an absolute horizontal offset.
    pub fn set_offset_x(&mut self, offset_x: f32) {
        self.offset_x = offset_x;
    }

    /// Updates frame and content size for a new surface size, keeping the
    /// frame origin. The caller re-derives the offset from the logical page.
    pub fn resize(&mut self, size: Size, page_count: usize) {
        self.frame.width = size.width;
        self.frame.height = size.height;
        #[allow(clippy::cast_precision_loss)] // page counts stay far below 2^24
        let content_width = size.width * page_count as f32;
        self.content_size = Size::new(content_width, size.height);
    }

    /// Frame for page `index`: the surface bounds shifted right by
    /// `index × page_width`, relative to the content area.
    #[must_use]
    pub fn page_frame(&self, index: usize) -> Rectangle {
        #[allow(clippy::cast_precision_loss)] // page counts stay far below 2^24
        let x = self.page_width() * index as f32;
        Rectangle {
            x,
            y: 0.0,
            width: self.frame.width,
            height: self.frame.height,
        }
    }

    /// Page shown at `offset_x`: `floor(offset / page_width)`, clamped to the
    /// valid page range. Returns 0 for degenerate widths or an empty surface.
    #[must_use]
    pub fn page_for_offset(&self, offset_x: f32, page_count: usize) -> usize {
        if page_count == 0 || self.page_width() <= 0.0 {
            return 0;
        }

        let raw = (offset_x / self.page_width()).floor();
        if raw <= 0.0 {
            return 0;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // floored, >= 0
        let page = raw as usize;
        page.min(page_count - 1)
    }

    /// Offset that shows page `index` flush with the surface.
    #[must_use]
    pub fn offset_for_page(&self, index: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)] // page counts stay far below 2^24
        let index = index as f32;
        self.page_width() * index
    }
}

/// In-flight snap of the content offset toward a target page.
///
/// The offset is derived from the eased elapsed time on every sample, so the
/// motion stays smooth regardless of tick cadence and never relies on
/// intermediate snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    from_x: f32,
    to_x: f32,
    started_at: Instant,
    duration: Duration,
}

impl SnapAnimation {
    /// Starts a snap from `from_x` to `to_x` at `now`, using the fixed
    /// indicator-tap duration.
    #[must_use]
    pub fn new(from_x: f32, to_x: f32, now: Instant) -> Self {
        Self {
            from_x,
            to_x,
            started_at: now,
            duration: PAGE_SNAP_DURATION,
        }
    }

    /// Offset at `now` plus whether the snap has finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return (self.to_x, true);
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_in_out(t);
        (self.from_x + (self.to_x - self.from_x) * eased, false)
    }
}

/// Smoothstep ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
