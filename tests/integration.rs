// SPDX-License-Identifier: MPL-2.0
//! End-to-end properties of the lightbox controller: construction, paging
//! synchronization, rotation, and dismissal.

use approx::assert_abs_diff_eq;
use iced::widget::image::Handle;
use iced::Size;
use iced_lightbox::config::LightboxConfig;
use iced_lightbox::host::StaticHost;
use iced_lightbox::ui::lightbox::{Effect, Message, State};
use std::time::Instant;

const SCREEN: Size = Size::new(320.0, 568.0);

fn sample_images(count: usize) -> Vec<Handle> {
    (0..count)
        .map(|_| Handle::from_rgba(1, 1, vec![255_u8, 255, 255, 255]))
        .collect()
}

fn presented_lightbox(count: usize) -> State {
    let host = StaticHost::new(SCREEN);
    let mut state = State::new(sample_images(count), LightboxConfig::default(), Box::new(host));
    state.on_load();
    state.on_will_appear();
    state
}

#[test]
fn page_count_matches_image_count_for_any_n() {
    for count in 0..6 {
        let state = presented_lightbox(count);
        assert_eq!(state.page_views().len(), count);
        assert_eq!(state.page_control().page_count(), count);
    }
}

#[test]
fn settle_at_page_offset_selects_that_page() {
    let mut state = presented_lightbox(5);
    for page in 0..5 {
        let offset_x = page as f32 * SCREEN.width;
        state.handle_message(Message::ScrollSettled { offset_x });
        assert_eq!(state.page_control().current_page(), page);
    }
}

#[test]
fn three_image_scenario_lays_out_left_to_right() {
    let state = presented_lightbox(3);
    assert_eq!(state.page_control().current_page(), 0);
    assert_abs_diff_eq!(state.page_views()[0].frame().x, 0.0);
    assert_abs_diff_eq!(state.page_views()[1].frame().x, SCREEN.width);
    assert_abs_diff_eq!(state.page_views()[2].frame().x, 2.0 * SCREEN.width);
}

#[test]
fn zero_image_scenario_is_valid() {
    let state = presented_lightbox(0);
    assert_eq!(state.page_control().page_count(), 0);
    assert_abs_diff_eq!(state.scroll().content_size().width, 0.0);
}

#[test]
fn repeated_resize_produces_identical_layout() {
    let rotated = Size::new(568.0, 320.0);
    let mut state = presented_lightbox(4);
    state.handle_message(Message::ScrollSettled {
        offset_x: 2.0 * SCREEN.width,
    });

    state.handle_message(Message::Resized(rotated));
    let frames: Vec<_> = state.page_views().iter().map(|p| p.frame()).collect();
    let offset = state.scroll().offset_x();

    state.handle_message(Message::Resized(rotated));
    let frames_again: Vec<_> = state.page_views().iter().map(|p| p.frame()).collect();

    assert_eq!(frames, frames_again);
    assert_abs_diff_eq!(state.scroll().offset_x(), offset);
    assert_abs_diff_eq!(offset, 2.0 * rotated.width);
}

#[test]
fn settle_then_same_size_resize_round_trips() {
    let mut state = presented_lightbox(4);
    state.handle_message(Message::ScrollSettled {
        offset_x: 3.0 * SCREEN.width,
    });

    state.handle_message(Message::Resized(SCREEN));
    assert_eq!(state.page_control().current_page(), 3);
    assert_abs_diff_eq!(state.scroll().offset_x(), 3.0 * SCREEN.width);
}

#[test]
fn indicator_tap_snaps_over_the_fixed_duration() {
    let mut state = presented_lightbox(3);
    let before = Instant::now();

    state.handle_message(Message::IndicatorPressed(2));
    assert_eq!(state.page_control().current_page(), 2);
    // No immediate jump.
    assert_abs_diff_eq!(state.scroll().offset_x(), 0.0);

    state.advance_animations(before + iced_lightbox::config::PAGE_SNAP_DURATION * 2);
    assert_abs_diff_eq!(state.scroll().offset_x(), 2.0 * SCREEN.width);
}

#[test]
fn rapid_close_presses_request_a_single_dismissal() {
    let mut state = presented_lightbox(2);

    let first = state.handle_message(Message::ClosePressed);
    let second = state.handle_message(Message::ClosePressed);

    assert_eq!(first, Effect::DismissRequested);
    assert_eq!(second, Effect::None);
}

#[test]
fn dismissal_finishes_with_a_transparent_backdrop() {
    let mut state = presented_lightbox(2);
    let before = Instant::now();

    state.handle_message(Message::ClosePressed);
    let effect = state.advance_animations(before + iced_lightbox::config::TRANSITION_DURATION * 2);

    assert_eq!(effect, Effect::Dismissed);
    assert_abs_diff_eq!(state.backdrop_alpha(), 0.0);
    state.on_will_disappear();
}

#[test]
fn restore_from_persisted_state_is_refused() {
    let result = State::from_persisted(b"serialized lightbox");
    assert!(result.is_err());
}
