// SPDX-License-Identifier: MPL-2.0
//! Host environment capability injected into the lightbox controller.
//!
//! The original design reached for global accessors (shared application,
//! status bar, screen bounds). Here those services are modeled as a trait so
//! the embedding application decides how they map onto its windowing layer,
//! and tests can substitute an in-process double.

use iced::Size;

/// Animation style used when toggling status-bar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeStyle {
    /// Immediate toggle.
    None,
    /// Cross-fade over the host's default duration.
    #[default]
    Fade,
}

/// Services the lightbox consumes from its host environment.
///
/// All calls are synchronous and run on the UI event loop; the host is
/// responsible for serializing them with the rest of its callbacks.
pub trait Host {
    /// Current screen (or window) bounds in logical pixels.
    fn screen_bounds(&self) -> Size;

    /// Whether the status bar is currently hidden.
    fn status_bar_hidden(&self) -> bool;

    /// Shows or hides the status bar.
    fn set_status_bar_hidden(&mut self, hidden: bool, style: FadeStyle);
}

/// Host backed by plain values, for windowless embeddings and tests.
///
/// Records every status-bar change so assertions can inspect the sequence.
#[derive(Debug, Clone)]
pub struct StaticHost {
    bounds: Size,
    status_bar_hidden: bool,
    status_bar_changes: Vec<(bool, FadeStyle)>,
}

impl StaticHost {
    /// Creates a host reporting the given screen bounds.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            status_bar_hidden: false,
            status_bar_changes: Vec::new(),
        }
    }

    /// Updates the reported screen bounds (e.g. after a simulated rotation).
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Status-bar changes observed so far, oldest first.
    #[must_use]
    pub fn status_bar_changes(&self) -> &[(bool, FadeStyle)] {
        &self.status_bar_changes
    }
}

impl Default for StaticHost {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl Host for StaticHost {
    fn screen_bounds(&self) -> Size {
        self.bounds
    }

    fn status_bar_hidden(&self) -> bool {
        self.status_bar_hidden
    }

    fn set_status_bar_hidden(&mut self, hidden: bool, style: FadeStyle) {
        self.status_bar_hidden = hidden;
        self.status_bar_changes.push((hidden, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_host_reports_configured_bounds() {
        let host = StaticHost::new(Size::new(320.0, 568.0));
        assert_eq!(host.screen_bounds(), Size::new(320.0, 568.0));
        assert!(!host.status_bar_hidden());
    }

    #[test]
    fn status_bar_changes_are_recorded_in_order() {
        let mut host = StaticHost::default();
        host.set_status_bar_hidden(true, FadeStyle::Fade);
        host.set_status_bar_hidden(false, FadeStyle::None);

        assert!(!host.status_bar_hidden());
        assert_eq!(
            host.status_bar_changes(),
            &[(true, FadeStyle::Fade), (false, FadeStyle::None)]
        );
    }
}
