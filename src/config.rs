// SPDX-License-Identifier: MPL-2.0
//! Style configuration and policy constants for the lightbox.
//!
//! The configuration is supplied once by the embedding application and stays
//! read-only for the controller's lifetime. The constants below are the
//! single source of truth for the component's timing and layout policy.

use iced::{Color, Font};
use std::time::Duration;

// ==========================================================================
// Animation Policy
// ==========================================================================

/// Duration of the scroll snap triggered by a page-indicator tap.
pub const PAGE_SNAP_DURATION: Duration = Duration::from_millis(350);

/// Duration of the present/dismiss transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Interval between animation ticks (~60 fps).
pub const ANIMATION_TICK_INTERVAL: Duration = Duration::from_millis(16);

// ==========================================================================
// Layout Policy
// ==========================================================================

/// Close control origin relative to the top-left screen corner.
pub const CLOSE_BUTTON_ORIGIN: (f32, f32) = (12.5, 7.5);

/// Distance between the page indicator and the bottom screen edge.
pub const PAGE_CONTROL_BOTTOM_INSET: f32 = 20.0;

/// Read-only style values for the close control.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxConfig {
    /// Label shown on the close control.
    pub close_button_label: String,
    /// Label color.
    pub close_button_color: Color,
    /// Label font.
    pub close_button_font: Font,
    /// Label text size in logical pixels.
    pub close_button_text_size: f32,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            close_button_label: "Close".to_string(),
            close_button_color: Color::WHITE,
            close_button_font: Font::default(),
            close_button_text_size: crate::ui::design_tokens::typography::BODY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_visible_label() {
        let config = LightboxConfig::default();
        assert!(!config.close_button_label.is_empty());
        assert_eq!(config.close_button_color, Color::WHITE);
    }

    #[test]
    fn snap_duration_matches_policy() {
        assert_eq!(PAGE_SNAP_DURATION.as_millis(), 350);
    }
}
