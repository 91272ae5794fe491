// SPDX-License-Identifier: MPL-2.0
//! Theme mode value object.

use std::fmt;
use std::str::FromStr;

/// Light, dark, or follow-the-system appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes, in the order the selector lists them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns the i18n key of the label shown for this mode.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-option-light",
            ThemeMode::Dark => "theme-option-dark",
            ThemeMode::System => "theme-option-system",
        }
    }
}

/// Canonical, locale-independent name (`Light`, `Dark`, `System`).
impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown theme mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid theme_mode: {}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

/// Case-insensitive.
impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(UnknownThemeMode(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_canonical_names() {
        let names: Vec<String> = ThemeMode::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Light", "Dark", "System"]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("LIGHT".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("System".parse::<ThemeMode>(), Ok(ThemeMode::System));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid theme_mode: sepia");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
    }

    #[test]
    fn i18n_keys_are_distinct() {
        assert_ne!(ThemeMode::Light.i18n_key(), ThemeMode::Dark.i18n_key());
        assert_ne!(ThemeMode::Dark.i18n_key(), ThemeMode::System.i18n_key());
        assert_ne!(ThemeMode::Light.i18n_key(), ThemeMode::System.i18n_key());
    }
}
