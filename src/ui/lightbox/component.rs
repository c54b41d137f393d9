// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: state, lifecycle, paging synchronization and update
//! logic.

use crate::config::{LightboxConfig, ANIMATION_TICK_INTERVAL, CLOSE_BUTTON_ORIGIN};
use crate::error::{Error, Result};
use crate::host::{FadeStyle, Host};
use crate::ui::design_tokens::opacity;
use crate::ui::lightbox::page::PageView;
use crate::ui::lightbox::page_control::PageControl;
use crate::ui::lightbox::scroll::{PagingScroll, SnapAnimation};
use crate::ui::lightbox::transition::{
    RunningTransition, TransitionDirection, TransitionManager,
};
use iced::widget::image::Handle;
use iced::{Element, Point, Rectangle, Size, Subscription};
use std::time::Instant;

/// Messages emitted by the lightbox widgets and the host runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A swipe's deceleration finished with the content at this offset.
    ScrollSettled { offset_x: f32 },
    /// The page indicator was tapped and already points at this page.
    IndicatorPressed(usize),
    /// The close control was pressed.
    ClosePressed,
    /// The screen rotated or the window was resized.
    Resized(Size),
    /// Animation heartbeat, active only while something animates.
    Tick,
}

/// Side effects the embedding application should perform after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked to close the lightbox; emitted at most once.
    DismissRequested,
    /// The present transition reached full screen.
    Presented,
    /// The dismiss transition finished; remove the modal now.
    Dismissed,
}

/// Full controller state.
///
/// Built in two phases: [`new`](Self::new) creates the shell and lays out
/// every subview; [`on_load`](Self::on_load) wires the transition manager to
/// the live scroll geometry once the hierarchy exists.
pub struct State {
    config: LightboxConfig,
    host: Box<dyn Host>,

    page_views: Vec<PageView>,
    page_control: PageControl,
    scroll: PagingScroll,

    transition_manager: TransitionManager,
    transition: Option<RunningTransition>,
    snap: Option<SnapAnimation>,

    /// Frame of the lightbox surface; tracks the scroll frame except while a
    /// transition interpolates it.
    surface_frame: Rectangle,
    backdrop_alpha: f32,
    /// Originating on-screen rectangle, kept for the dismiss animator.
    source_frame: Rectangle,

    loaded: bool,
    saved_status_bar_hidden: bool,
    dismiss_requested: bool,
}

impl State {
    /// Builds a controller for the given images, in order. An empty list
    /// yields a valid zero-page lightbox.
    pub fn new(images: Vec<Handle>, config: LightboxConfig, host: Box<dyn Host>) -> Self {
        let bounds = host.screen_bounds();
        let frame = Rectangle::new(Point::ORIGIN, bounds);
        let scroll = PagingScroll::new(frame, images.len());
        let page_control = PageControl::new(images.len());
        let page_views = images.into_iter().map(PageView::new).collect();

        let mut state = Self {
            config,
            host,
            page_views,
            page_control,
            scroll,
            transition_manager: TransitionManager::default(),
            transition: None,
            snap: None,
            surface_frame: frame,
            backdrop_alpha: opacity::OPAQUE,
            source_frame: frame,
            loaded: false,
            saved_status_bar_hidden: false,
            dismiss_requested: false,
        };
        state.configure_page_frames();
        state
    }

    /// Restoring a controller from serialized state is unsupported: its view
    /// hierarchy cannot be reconstructed, so this fails unconditionally.
    pub fn from_persisted(_snapshot: &[u8]) -> Result<Self> {
        Err(Error::PersistedState)
    }

    // ------------------------------------------------------------------
    // Lifecycle hooks (invoked by the host, in order)
    // ------------------------------------------------------------------

    /// One-time setup after the view hierarchy exists: opaque black
    /// background, transition manager wired to the live scroll frame.
    /// Repeat calls are ignored.
    pub fn on_load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        self.backdrop_alpha = opacity::OPAQUE;
        self.transition_manager.wire(self.scroll.frame());
    }

    /// Saves the host's status-bar visibility and hides the bar with a fade.
    /// May run once per presentation cycle.
    pub fn on_will_appear(&mut self) {
        self.saved_status_bar_hidden = self.host.status_bar_hidden();
        self.host.set_status_bar_hidden(true, FadeStyle::Fade);
    }

    /// Restores the previously saved status-bar visibility with a fade.
    pub fn on_will_disappear(&mut self) {
        self.host
            .set_status_bar_hidden(self.saved_status_bar_hidden, FadeStyle::Fade);
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    /// Starts the present transition from the originating element's
    /// on-screen rectangle. Requires [`on_load`](Self::on_load) to have run.
    pub fn begin_present(&mut self, source: Rectangle) -> Result<()> {
        let animator = self
            .transition_manager
            .animator(TransitionDirection::Present, source)?;

        self.source_frame = source;
        self.backdrop_alpha = opacity::TRANSPARENT;
        self.surface_frame = source;
        self.transition = Some(RunningTransition::new(animator, Instant::now()));
        Ok(())
    }

    /// The manager supplying present/dismiss animators, for hosts that drive
    /// the transition themselves.
    #[must_use]
    pub fn transition_manager(&self) -> &TransitionManager {
        &self.transition_manager
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::ScrollSettled { offset_x } => {
                self.scroll.set_offset_x(offset_x);
                let page = self
                    .scroll
                    .page_for_offset(offset_x, self.page_control.page_count());
                self.page_control.set_current_page(page);
                Effect::None
            }
            Message::IndicatorPressed(page) => {
                // The indicator updates first; the scroll surface then
                // animates toward its value instead of jumping.
                self.page_control.set_current_page(page);
                let target = self
                    .scroll
                    .offset_for_page(self.page_control.current_page());
                self.snap = Some(SnapAnimation::new(
                    self.scroll.offset_x(),
                    target,
                    Instant::now(),
                ));
                Effect::None
            }
            Message::ClosePressed => self.request_dismiss(),
            Message::Resized(size) => {
                self.resize(size);
                Effect::None
            }
            Message::Tick => self.advance_animations(Instant::now()),
        }
    }

    /// Updates the scroll surface and every page for a new screen size,
    /// keeping the logical page read from the indicator centered. Calling it
    /// twice with the same size yields the same layout.
    pub fn resize(&mut self, size: Size) {
        // A resize invalidates any in-flight snap target geometry.
        self.snap = None;

        self.scroll.resize(size, self.page_control.page_count());
        self.scroll
            .set_offset_x(self.scroll.offset_for_page(self.page_control.current_page()));
        self.configure_page_frames();

        if self.transition.is_none() {
            self.surface_frame = self.scroll.frame();
        }
        if self.loaded {
            self.transition_manager.wire(self.scroll.frame());
        }
    }

    /// Advances the snap and transition animations to `now`.
    pub fn advance_animations(&mut self, now: Instant) -> Effect {
        if let Some(snap) = self.snap {
            let (offset_x, done) = snap.sample(now);
            self.scroll.set_offset_x(offset_x);
            if done {
                self.snap = None;
            }
        }

        if let Some(transition) = &mut self.transition {
            let frame = transition.advance(now);
            self.surface_frame = frame.frame;
            self.backdrop_alpha = frame.backdrop_alpha;

            if transition.is_finished() && transition.finish() {
                let direction = transition.direction();
                self.transition = None;
                return match direction {
                    TransitionDirection::Present => {
                        self.surface_frame = self.scroll.frame();
                        Effect::Presented
                    }
                    TransitionDirection::Dismiss => Effect::Dismissed,
                };
            }
        }

        Effect::None
    }

    fn request_dismiss(&mut self) -> Effect {
        if self.dismiss_requested {
            // Already dismissing; repeated presses are a no-op.
            return Effect::None;
        }
        self.dismiss_requested = true;

        // Interrupt a present transition in flight; its completion signal is
        // consumed here so it cannot fire later.
        if let Some(transition) = &mut self.transition {
            transition.cancel();
            let _ = transition.finish();
            self.transition = None;
        }

        match self
            .transition_manager
            .animator(TransitionDirection::Dismiss, self.source_frame)
        {
            Ok(animator) => {
                self.transition = Some(RunningTransition::new(animator, Instant::now()));
            }
            Err(_) => {
                // Never loaded (degenerate host flow): dismiss without an
                // animation rather than refuse.
            }
        }

        Effect::DismissRequested
    }

    /// Animation heartbeat, active only while a snap or transition runs.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.snap.is_some() || self.transition.is_some() {
            iced::time::every(ANIMATION_TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    fn configure_page_frames(&mut self) {
        for (index, page_view) in self.page_views.iter_mut().enumerate() {
            page_view.configure_frame(self.scroll.page_frame(index));
        }
    }

    /// Close control origin in screen coordinates.
    #[must_use]
    pub fn close_button_origin(&self) -> Point {
        Point::new(CLOSE_BUTTON_ORIGIN.0, CLOSE_BUTTON_ORIGIN.1)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &LightboxConfig {
        &self.config
    }

    #[must_use]
    pub fn page_views(&self) -> &[PageView] {
        &self.page_views
    }

    #[must_use]
    pub fn page_control(&self) -> &PageControl {
        &self.page_control
    }

    #[must_use]
    pub fn scroll(&self) -> &PagingScroll {
        &self.scroll
    }

    /// Backdrop opacity, interpolated while a transition runs.
    #[must_use]
    pub fn backdrop_alpha(&self) -> f32 {
        self.backdrop_alpha
    }

    /// Current frame of the lightbox surface.
    #[must_use]
    pub fn surface_frame(&self) -> Rectangle {
        self.surface_frame
    }

    /// Whether a dismissal has been requested.
    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.dismiss_requested
    }

    /// Whether a snap or transition is currently animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some() || self.transition.is_some()
    }

    /// Page nearest the current scroll offset, used for rendering.
    #[must_use]
    pub fn visible_page(&self) -> usize {
        let half = self.scroll.page_width() / 2.0;
        self.scroll
            .page_for_offset(self.scroll.offset_x() + half, self.page_control.page_count())
    }

    pub fn view(&self) -> Element<'_, Message> {
        super::view(super::ViewContext {
            config: &self.config,
            page: self.page_views.get(self.visible_page()),
            page_control: &self.page_control,
            backdrop_alpha: self.backdrop_alpha,
        })
    }
}
