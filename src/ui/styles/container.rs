// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface behind each setting row.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so cards stay readable in both light and dark modes without
/// hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::CARD,
        ))),
        border: Border {
            radius: radius::CARD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Title bar across the top of the panel.
pub fn top_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.primary.base.color)),
        text_color: Some(palette.primary.base.text),
        shadow: shadow::RESTING,
        ..Default::default()
    }
}

/// Floating option list of the theme selector.
pub fn menu(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::THIN,
            radius: radius::POPUP.into(),
        },
        shadow: shadow::RAISED,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme_background() {
        let light = card(&Theme::Light);
        let dark = card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn top_bar_uses_primary_color() {
        let theme = Theme::Light;
        let style = top_bar(&theme);
        assert_eq!(
            style.background,
            Some(Background::Color(
                theme.extended_palette().primary.base.color
            ))
        );
    }

    #[test]
    fn menu_has_an_outline() {
        assert_eq!(menu(&Theme::Dark).border.width, border::THIN);
    }
}
