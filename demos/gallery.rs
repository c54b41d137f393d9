// SPDX-License-Identifier: MPL-2.0
//! Gallery demo: opens the images given on the command line in a lightbox.
//!
//! Usage: `cargo run --example gallery -- photo1.jpg photo2.png ...`

use iced::widget::image::Handle;
use iced::{Element, Point, Rectangle, Size, Subscription, Task};
use iced_lightbox::config::LightboxConfig;
use iced_lightbox::host::StaticHost;
use iced_lightbox::ui::lightbox::{self, Effect, Message};

const WINDOW_SIZE: Size = Size::new(800.0, 600.0);

fn main() -> iced::Result {
    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("iced_lightbox gallery")
        .subscription(Gallery::subscription)
        .run()
}

struct Gallery {
    lightbox: lightbox::State,
}

impl Gallery {
    fn new() -> Self {
        let args = pico_args::Arguments::from_env();
        let images: Vec<Handle> = args
            .finish()
            .into_iter()
            .filter_map(|raw| raw.into_string().ok())
            .filter_map(|path| load_image(&path))
            .collect();

        let host = StaticHost::new(WINDOW_SIZE);
        let mut state = lightbox::State::new(images, LightboxConfig::default(), Box::new(host));

        state.on_load();
        state.on_will_appear();

        // Pretend the lightbox was opened from a centered thumbnail.
        let thumbnail = Rectangle::new(Point::new(368.0, 268.0), Size::new(64.0, 64.0));
        if state.begin_present(thumbnail).is_err() {
            eprintln!("present requested before the lightbox was loaded");
        }

        Self { lightbox: state }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match self.lightbox.handle_message(message) {
            Effect::Dismissed => {
                self.lightbox.on_will_disappear();
                iced::exit()
            }
            Effect::DismissRequested | Effect::Presented | Effect::None => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.lightbox.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resizes = iced::window::resize_events().map(|(_id, size)| Message::Resized(size));
        Subscription::batch([self.lightbox.subscription(), resizes])
    }
}

fn load_image(path: &str) -> Option<Handle> {
    match image_rs::open(path) {
        Ok(image) => {
            let rgba = image.into_rgba8();
            let (width, height) = rgba.dimensions();
            Some(Handle::from_rgba(width, height, rgba.into_raw()))
        }
        Err(err) => {
            eprintln!("Failed to load {path}: {err}");
            None
        }
    }
}
