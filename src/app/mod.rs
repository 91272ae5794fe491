// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the settings screen to localization and the toast
//! notifications, and reads the launcher configuration once at startup.
//! Nothing the user edits is written back: closing the window discards the
//! form.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::saved_notification;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    settings: SettingsState,
    notifications: notifications::Manager,
    /// Window theme, taken from the configuration file.
    theme_mode: ThemeMode,
    toast_duration: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("settings", &self.settings)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(None, &Config::default(), None)
    }
}

impl App {
    /// Loads the configuration and localization, then opens the screen with
    /// fresh form values.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::from_config(flags.lang, &config, config_warning);
        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    ///
    /// `config_warning` is the i18n key of a problem met while loading the
    /// configuration; it is shown as a warning toast.
    #[must_use]
    pub fn from_config(
        cli_lang: Option<String>,
        config: &Config,
        config_warning: Option<String>,
    ) -> Self {
        let i18n = I18n::new(cli_lang, config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }
        if let Some(key) = i18n.load_warning() {
            notifications.push(Notification::warning(key));
        }

        tracing::info!(
            locale = %i18n.current_locale(),
            theme_mode = %config.general.theme_mode,
            "settings panel ready"
        );

        Self {
            i18n,
            settings: SettingsState::default(),
            notifications,
            theme_mode: config.general.theme_mode,
            toast_duration: config.notifications.duration(),
        }
    }

    /// Current form state.
    #[must_use]
    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    /// Pending toasts.
    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        theming::iced_theme(self.theme_mode)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.settings.is_theme_menu_open()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Settings(settings_message) => {
                let mut ctx = update::UpdateContext {
                    settings: &mut self.settings,
                    notifications: &mut self.notifications,
                    toast_duration: self.toast_duration,
                };
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_now) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            settings: &self.settings,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::settings;

    fn en_us_app() -> App {
        App::from_config(Some("en-US".to_string()), &Config::default(), None)
    }

    #[test]
    fn title_is_localized() {
        assert_eq!(en_us_app().title(), "Settings");
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let app = App::from_config(None, &config, None);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn config_warning_becomes_a_toast() {
        let app = App::from_config(
            Some("en-US".to_string()),
            &Config::default(),
            Some("notification-config-parse-error".to_string()),
        );

        let pending: Vec<&notifications::Body> =
            app.notifications().visible().map(Notification::body).collect();
        assert_eq!(
            pending,
            [&notifications::Body::Localized(
                "notification-config-parse-error".to_string()
            )]
        );
    }

    #[test]
    fn clean_start_has_no_toasts() {
        assert!(!en_us_app().notifications().has_notifications());
    }

    #[test]
    fn dismiss_message_removes_the_toast() {
        let mut app = en_us_app();
        let _ = app.update(Message::Settings(settings::Message::Save));
        let id = app.notifications().visible().next().unwrap().id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));

        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn toast_duration_comes_from_config() {
        let mut config = Config::default();
        config.notifications.duration_secs = 7;
        let mut app = App::from_config(Some("en-US".to_string()), &config, None);

        let _ = app.update(Message::Settings(settings::Message::Save));

        let toast = app.notifications().visible().next().unwrap();
        assert_eq!(toast.dismiss_after(), Duration::from_secs(7));
    }

    #[test]
    fn view_renders() {
        let app = en_us_app();
        let _ = app.view();
    }
}
