// SPDX-License-Identifier: MPL-2.0
//! Page indicator state: page count and the authoritative current page.

/// State behind the row of indicator dots.
///
/// Holds the authoritative current-page integer. The controller writes to it
/// from exactly two places: scroll settle events and indicator taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageControl {
    page_count: usize,
    current_page: usize,
}

impl PageControl {
    /// Creates an indicator for `page_count` pages, starting on page 0.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            current_page: 0,
        }
    }

    /// Total number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Current page, always within `0..page_count` (0 when empty).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Sets the current page, clamped to the valid range.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.min(self.page_count.saturating_sub(1));
    }
}
