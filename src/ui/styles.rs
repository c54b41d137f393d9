// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the lightbox.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Backdrop behind the pages. Alpha is 1.0 once presented and interpolated
/// by the transition while presenting or dismissing.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Borderless text button used for the close control.
pub fn close_button(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Pressed => Color {
                a: opacity::OVERLAY_PRESSED,
                ..text_color
            },
            _ => text_color,
        };

        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            ..button::Style::default()
        }
    }
}

/// Page-indicator dot; active dots are opaque, inactive dots dimmed.
pub fn indicator_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else {
            opacity::DOT_INACTIVE
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: (crate::ui::design_tokens::sizing::INDICATOR_DOT / 2.0).into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
