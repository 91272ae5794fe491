// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::Message;
use crate::domain::settings::Settings;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use iced::Task;
use std::time::Duration;

/// Mutable slices of `App` a handler may touch.
pub struct UpdateContext<'a> {
    pub settings: &'a mut SettingsState,
    pub notifications: &'a mut notifications::Manager,
    pub toast_duration: Duration,
}

/// Forwards a message to the settings screen and reacts to its event.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => {}
        SettingsEvent::Saved(snapshot) => {
            tracing::info!(
                notifications = snapshot.notifications_enabled,
                dark_mode = snapshot.dark_mode_enabled,
                font_size = %snapshot.font_size,
                theme = %snapshot.selected_theme,
                "settings saved"
            );
            ctx.notifications
                .push(saved_notification(&snapshot, ctx.toast_duration));
        }
    }
    Task::none()
}

/// Builds the transient confirmation for a save.
#[must_use]
pub fn saved_notification(snapshot: &Settings, duration: Duration) -> Notification {
    Notification::confirmation(snapshot.summary()).auto_dismiss(duration)
}
