// SPDX-License-Identifier: MPL-2.0
//! Present/dismiss transition: animator construction and interpolation.
//!
//! The manager never holds the controller itself, only geometry copied from
//! it at wiring time. Wiring happens in `on_load`, once the scroll surface
//! exists; asking for an animator earlier is an error.

use crate::config::TRANSITION_DURATION;
use crate::error::{Error, Result};
use crate::ui::lightbox::scroll::ease_in_out;
use iced::Rectangle;
use std::time::{Duration, Instant};

/// Direction of a modal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    /// From the originating rectangle to full screen.
    Present,
    /// From full screen back to the originating rectangle.
    Dismiss,
}

/// Supplies animators for the host's modal presentation mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionManager {
    scroll_frame: Option<Rectangle>,
}

impl TransitionManager {
    /// Stores the live scroll-surface frame. Must be called once the
    /// controller's view hierarchy exists, before any animator is requested.
    pub fn wire(&mut self, scroll_frame: Rectangle) {
        self.scroll_frame = Some(scroll_frame);
    }

    /// Whether [`wire`](Self::wire) has run.
    #[must_use]
    pub fn is_wired(&self) -> bool {
        self.scroll_frame.is_some()
    }

    /// Builds the animator for one direction. `source` is the on-screen
    /// rectangle of the originating element (e.g. a tapped thumbnail).
    pub fn animator(
        &self,
        direction: TransitionDirection,
        source: Rectangle,
    ) -> Result<TransitionAnimator> {
        let target = self.scroll_frame.ok_or(Error::TransitionNotWired)?;
        Ok(TransitionAnimator {
            direction,
            source,
            target,
            duration: TRANSITION_DURATION,
        })
    }
}

/// Interpolates the lightbox frame and backdrop opacity between the
/// originating rectangle and the full-screen state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionAnimator {
    direction: TransitionDirection,
    source: Rectangle,
    target: Rectangle,
    duration: Duration,
}

impl TransitionAnimator {
    #[must_use]
    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Frame at eased progress `t` in `[0, 1]`.
    #[must_use]
    pub fn frame_at(&self, t: f32) -> Rectangle {
        let (from, to) = match self.direction {
            TransitionDirection::Present => (self.source, self.target),
            TransitionDirection::Dismiss => (self.target, self.source),
        };
        lerp_rectangle(from, to, t)
    }

    /// Backdrop alpha at eased progress `t`: 0 → 1 while presenting,
    /// 1 → 0 while dismissing.
    #[must_use]
    pub fn backdrop_alpha_at(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.direction {
            TransitionDirection::Present => t,
            TransitionDirection::Dismiss => 1.0 - t,
        }
    }
}

/// Visual state of a transition at one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub frame: Rectangle,
    pub backdrop_alpha: f32,
}

/// A transition in flight, owning its completion flag.
///
/// Completion is signaled exactly once: natural completion (`advance`
/// reaching the end) and cancellation both route through
/// [`finish`](Self::finish), which is idempotent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningTransition {
    animator: TransitionAnimator,
    started_at: Instant,
    finished: bool,
}

impl RunningTransition {
    #[must_use]
    pub fn new(animator: TransitionAnimator, now: Instant) -> Self {
        Self {
            animator,
            started_at: now,
            finished: false,
        }
    }

    #[must_use]
    pub fn direction(&self) -> TransitionDirection {
        self.animator.direction()
    }

    /// Samples the transition at `now`. Once the duration has elapsed the
    /// end state is returned and the transition is marked finished.
    pub fn advance(&mut self, now: Instant) -> TransitionFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = if elapsed >= self.animator.duration {
            self.finished = true;
            1.0
        } else {
            ease_in_out(elapsed.as_secs_f32() / self.animator.duration.as_secs_f32())
        };

        TransitionFrame {
            frame: self.animator.frame_at(t),
            backdrop_alpha: self.animator.backdrop_alpha_at(t),
        }
    }

    /// Interrupts the transition, jumping to its end state.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Consumes the completion signal. Returns `true` exactly once.
    pub fn finish(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }

    /// Whether the transition reached (or was forced to) its end state and
    /// has not yet been asked for its completion signal.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn lerp_rectangle(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    let t = t.clamp(0.0, 1.0);
    Rectangle {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t),
        height: lerp(from.height, to.height, t),
    }
}
