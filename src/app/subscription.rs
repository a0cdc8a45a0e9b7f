// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are only routed while the content dialog is visible, and
//! the periodic tick only runs while toasts are on screen.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval at which toast lifetimes are re-evaluated.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes the Escape key to the application while the dialog is open.
///
/// Escape is delivered even when a text field captured the key press, so the
/// dialog can be dismissed while typing.
pub fn create_event_subscription(modal_visible: bool) -> Subscription<Message> {
    if !modal_visible {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification expiry.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
