// SPDX-License-Identifier: MPL-2.0
//! A single lightbox page: one image inside a layout container.

use iced::widget::image::Handle;
use iced::Rectangle;

/// One image occupying one full-width scroll position.
///
/// The frame is never derived from the image content; it is assigned by the
/// controller whenever the scroll surface's bounds or the page index change.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    image: Handle,
    frame: Rectangle,
}

impl PageView {
    /// Wraps a decoded image. The frame starts empty until the controller
    /// lays the page out.
    #[must_use]
    pub fn new(image: Handle) -> Self {
        Self {
            image,
            frame: Rectangle::default(),
        }
    }

    /// Assigns the bounding rectangle. The image fills the bounds with the
    /// component-wide scaling policy (`ContentFit::Contain`, centered), so no
    /// per-page geometry is kept beyond the frame itself.
    pub fn configure_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    /// Current bounding rectangle within the scroll surface's content.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// The wrapped image.
    #[must_use]
    pub fn image(&self) -> &Handle {
        &self.image
    }
}
