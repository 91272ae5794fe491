// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions exist only while there is something to do: keyboard
//! routing while the theme selector is open, ticking while toasts are pending.
//! Dropping the window drops them with it.

use super::Message;
use crate::ui::settings;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between two toast expiry checks.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes Escape to the settings screen so it can close the theme selector.
pub fn create_event_subscription(theme_menu_open: bool) -> Subscription<Message> {
    if !theme_menu_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::Settings(settings::Message::ThemeMenuDismissed)),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
