// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the lightbox UI.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const DOT_INACTIVE: f32 = 0.4;
    pub const OVERLAY_PRESSED: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of a page-indicator dot.
    pub const INDICATOR_DOT: f32 = 8.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 16.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scale_is_ordered() {
        assert!(opacity::TRANSPARENT == 0.0);
        assert!(opacity::OPAQUE == 1.0);
        assert!(opacity::DOT_INACTIVE > 0.0 && opacity::DOT_INACTIVE < 1.0);
    }

    #[test]
    fn spacing_follows_the_grid() {
        assert!(spacing::XS < spacing::SM && spacing::SM < spacing::MD);
    }

    #[test]
    fn palette_extremes_differ() {
        assert_ne!(palette::BLACK, palette::WHITE);
    }
}
