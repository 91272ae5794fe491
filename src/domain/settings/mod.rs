// SPDX-License-Identifier: MPL-2.0
//! Settings form values.
//!
//! [`Settings`] is the plain snapshot of the four values the form edits.
//! It is created with its defaults when the screen opens and discarded with
//! it; nothing here is persisted.

pub mod newtypes;
pub mod theme;

pub use newtypes::{font_size_bounds, FontSize};
pub use theme::{ThemeMode, UnknownThemeMode};

/// Immutable snapshot of the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub notifications_enabled: bool,
    pub dark_mode_enabled: bool,
    pub font_size: FontSize,
    pub selected_theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            dark_mode_enabled: false,
            font_size: FontSize::default(),
            selected_theme: ThemeMode::Light,
        }
    }
}

impl Settings {
    /// Confirmation shown after a save.
    ///
    /// The wording and the value spellings (`true`, `16.0`, `Light`) are
    /// fixed: the same text appears whatever the UI language.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Settings saved: Notifications={}, DarkMode={}, FontSize={}, Theme={}",
            self.notifications_enabled,
            self.dark_mode_enabled,
            self.font_size,
            self.selected_theme,
        )
    }
}
