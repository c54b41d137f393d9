// SPDX-License-Identifier: MPL-2.0
//! Lightbox module: paging controller, per-page views, indicator, and the
//! present/dismiss transition.

pub mod component;
pub mod page;
pub mod page_control;
pub mod scroll;
pub mod transition;

pub use component::{Effect, Message, State};

use crate::config::{LightboxConfig, CLOSE_BUTTON_ORIGIN, PAGE_CONTROL_BOTTOM_INSET};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container, Image, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length, Padding};
use page::PageView;
use page_control::PageControl;

/// Borrowed state required to render the lightbox.
pub struct ViewContext<'a> {
    pub config: &'a LightboxConfig,
    /// Page nearest the current scroll offset; `None` for an empty lightbox.
    pub page: Option<&'a PageView>,
    pub page_control: &'a PageControl,
    pub backdrop_alpha: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::backdrop(ctx.backdrop_alpha));

    let mut stack = Stack::new().push(backdrop);

    if let Some(page) = ctx.page {
        let image = Image::new(page.image().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);
        stack = stack.push(
            Container::new(image)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    stack = stack.push(close_control(ctx.config));

    if ctx.page_control.page_count() > 0 {
        stack = stack.push(indicator(ctx.page_control));
    }

    stack.into()
}

fn close_control(config: &LightboxConfig) -> Element<'_, Message> {
    let label = Text::new(config.close_button_label.as_str())
        .font(config.close_button_font)
        .size(config.close_button_text_size);

    let close = button(label)
        .style(styles::close_button(config.close_button_color))
        .on_press(Message::ClosePressed);

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top)
        .padding(Padding {
            top: CLOSE_BUTTON_ORIGIN.1,
            right: 0.0,
            bottom: 0.0,
            left: CLOSE_BUTTON_ORIGIN.0,
        })
        .into()
}

fn indicator(page_control: &PageControl) -> Element<'static, Message> {
    let mut dots = Row::new().spacing(spacing::XS);

    for index in 0..page_control.page_count() {
        let dot = button(
            Space::new()
                .width(Length::Fixed(sizing::INDICATOR_DOT))
                .height(Length::Fixed(sizing::INDICATOR_DOT)),
        )
        .padding(0)
        .style(styles::indicator_dot(index == page_control.current_page()))
        .on_press(Message::IndicatorPressed(index));

        dots = dots.push(dot);
    }

    Container::new(dots)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: PAGE_CONTROL_BOTTOM_INSET,
            left: 0.0,
        })
        .into()
}
