// SPDX-License-Identifier: MPL-2.0
//! Window theming.
//!
//! Maps the domain [`ThemeMode`] onto Iced themes, resolving `System` through
//! the platform's light/dark preference.

pub use crate::domain::settings::ThemeMode;

use iced::Theme;

/// Returns true if the effective theme is dark.
/// For System mode, detects the actual system theme.
#[must_use]
pub fn is_dark(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => {
            // Detect system theme; default to dark on detection error
            !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
        }
    }
}

/// Returns the Iced theme to render the window with.
#[must_use]
pub fn iced_theme(mode: ThemeMode) -> Theme {
    if is_dark(mode) {
        Theme::Dark
    } else {
        Theme::Light
    }
}
