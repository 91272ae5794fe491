// SPDX-License-Identifier: MPL-2.0
//! Button styles: the floating save button and the theme selector.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

/// Round accent button floating above the form.
pub fn fab(_theme: &Theme, status: Status) -> Style {
    let (fill, elevation) = match status {
        Status::Active => (palette::ACCENT, shadow::RAISED),
        Status::Hovered => (palette::ACCENT_HOVER, shadow::LIFTED),
        Status::Pressed => (palette::ACCENT_PRESSED, shadow::RESTING),
        Status::Disabled => (palette::MUTED, shadow::FLAT),
    };

    Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::ROUND.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            },
            ..elevation
        },
        snap: true,
    }
}

/// Theme selector trigger while open, and the chosen option in the list.
pub fn selected(_theme: &Theme, status: Status) -> Style {
    match status {
        Status::Hovered => outlined(
            palette::ACCENT_HOVER,
            palette::WHITE,
            palette::ACCENT,
            shadow::RAISED,
        ),
        Status::Disabled => outlined(palette::SMOKE, palette::MUTED, palette::MUTED, shadow::FLAT),
        Status::Active | Status::Pressed => outlined(
            palette::ACCENT,
            palette::WHITE,
            palette::ACCENT_PRESSED,
            shadow::RESTING,
        ),
    }
}

/// Theme selector trigger while closed.
pub fn unselected(theme: &Theme, status: Status) -> Style {
    let dark = theme.extended_palette().is_dark;
    let (fill, hover_fill, text) = if dark {
        (palette::GRAPHITE, palette::GRAPHITE_HOVER, palette::WHITE)
    } else {
        (palette::CHALK, palette::SMOKE, palette::INK)
    };

    match status {
        Status::Hovered => outlined(hover_fill, text, palette::ACCENT, shadow::RESTING),
        Status::Disabled => outlined(fill, palette::MUTED, palette::MUTED, shadow::FLAT),
        Status::Active | Status::Pressed => outlined(fill, text, palette::MUTED, shadow::FLAT),
    }
}

/// Entry of the theme option list; only hover paints it.
pub fn menu_item(theme: &Theme, status: Status) -> Style {
    let colors = theme.extended_palette();
    let background = matches!(status, Status::Hovered | Status::Pressed)
        .then(|| Background::Color(colors.background.strong.color));

    Style {
        background,
        text_color: colors.background.base.text,
        border: Border {
            radius: radius::CONTROL.into(),
            ..Border::default()
        },
        shadow: shadow::FLAT,
        snap: true,
    }
}

fn outlined(fill: Color, text: Color, outline: Color, elevation: Shadow) -> Style {
    Style {
        background: Some(Background::Color(fill)),
        text_color: text,
        border: Border {
            color: outline,
            width: border::THIN,
            radius: radius::CONTROL.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fab_is_a_round_accent_button() {
        let style = fab(&Theme::Light, Status::Active);

        assert_eq!(style.background, Some(Background::Color(palette::ACCENT)));
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::ROUND));
    }

    #[test]
    fn fab_sinks_when_pressed() {
        let active = fab(&Theme::Dark, Status::Active);
        let pressed = fab(&Theme::Dark, Status::Pressed);
        assert!(pressed.shadow.blur_radius < active.shadow.blur_radius);
    }

    #[test]
    fn open_and_closed_trigger_look_different() {
        for theme in [Theme::Light, Theme::Dark] {
            let open = selected(&theme, Status::Active);
            let closed = unselected(&theme, Status::Active);
            assert_ne!(open.background, closed.background);
        }
    }

    #[test]
    fn closed_trigger_follows_window_theme() {
        let light = unselected(&Theme::Light, Status::Active);
        let dark = unselected(&Theme::Dark, Status::Active);
        assert_eq!(light.text_color, palette::INK);
        assert_eq!(dark.text_color, palette::WHITE);
    }

    #[test]
    fn menu_item_is_flat_until_hovered() {
        assert!(menu_item(&Theme::Light, Status::Active).background.is_none());
        assert!(menu_item(&Theme::Light, Status::Hovered).background.is_some());
    }
}
