// SPDX-License-Identifier: MPL-2.0
use settings_panel::app::{App, Message};
use settings_panel::config::{self, Config};
use settings_panel::domain::settings::{Settings, ThemeMode};
use settings_panel::i18n::fluent::I18n;
use settings_panel::ui::settings::Message as SettingsMessage;
use std::fs;
use tempfile::tempdir;

fn en_us_app() -> App {
    App::from_config(Some("en-US".to_string()), &Config::default(), None)
}

fn toast_texts(app: &App) -> Vec<String> {
    app.notifications()
        .visible()
        .map(|notification| notification.text(&app.i18n))
        .collect()
}

#[test]
fn saving_defaults_shows_the_exact_summary() {
    let mut app = en_us_app();

    let _ = app.update(Message::Settings(SettingsMessage::Save));

    assert_eq!(
        toast_texts(&app),
        ["Settings saved: Notifications=true, DarkMode=false, FontSize=16.0, Theme=Light"]
    );
}

#[test]
fn saving_after_edits_reports_the_edited_values() {
    let mut app = en_us_app();

    for message in [
        SettingsMessage::NotificationsToggled(false),
        SettingsMessage::DarkModeToggled(true),
        SettingsMessage::FontSizeChanged(21.5),
        SettingsMessage::ThemeMenuToggled,
        SettingsMessage::ThemeSelected(ThemeMode::System),
        SettingsMessage::Save,
    ] {
        let _ = app.update(Message::Settings(message));
    }

    assert_eq!(
        toast_texts(&app),
        ["Settings saved: Notifications=false, DarkMode=true, FontSize=21.5, Theme=System"]
    );
}

#[test]
fn slider_input_out_of_range_is_reported_clamped() {
    let mut app = en_us_app();

    let _ = app.update(Message::Settings(SettingsMessage::FontSizeChanged(99.0)));
    let _ = app.update(Message::Settings(SettingsMessage::Save));

    assert_eq!(
        toast_texts(&app),
        ["Settings saved: Notifications=true, DarkMode=false, FontSize=24.0, Theme=Light"]
    );
}

#[test]
fn saving_twice_shows_two_independent_notifications() {
    let mut app = en_us_app();

    let _ = app.update(Message::Settings(SettingsMessage::Save));
    let _ = app.update(Message::Settings(SettingsMessage::Save));

    let ids: Vec<_> = app.notifications().visible().map(|n| n.id()).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    let expected = "Settings saved: Notifications=true, DarkMode=false, FontSize=16.0, Theme=Light";
    assert_eq!(toast_texts(&app), [expected, expected]);
}

#[test]
fn a_new_screen_starts_from_defaults() {
    let mut app = en_us_app();
    let _ = app.update(Message::Settings(SettingsMessage::DarkModeToggled(true)));
    let _ = app.update(Message::Settings(SettingsMessage::Save));
    drop(app);

    let reopened = en_us_app();
    assert_eq!(reopened.settings().settings(), Settings::default());
    assert!(!reopened.notifications().has_notifications());
}

#[test]
fn summary_text_is_identical_in_every_locale() {
    for lang in ["en-US", "es", "fr"] {
        let mut app = App::from_config(Some(lang.to_string()), &Config::default(), None);
        assert_eq!(app.i18n.current_locale().to_string(), lang);

        let _ = app.update(Message::Settings(SettingsMessage::Save));

        assert_eq!(
            toast_texts(&app),
            ["Settings saved: Notifications=true, DarkMode=false, FontSize=16.0, Theme=Light"],
            "locale {lang}"
        );
    }
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let english = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &english).current_locale().to_string(), "en-US");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let french = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &french).current_locale().to_string(), "fr");
}

#[test]
fn malformed_config_starts_with_a_warning_toast() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("config.toml"), "[notifications]\nduration_secs = \"soon\"\n")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    let app = App::from_config(Some("en-US".to_string()), &config, warning);

    assert_eq!(
        toast_texts(&app),
        ["The configuration file is invalid. Defaults are in use."]
    );
}
