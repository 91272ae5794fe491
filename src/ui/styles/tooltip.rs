// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the window surface (dark bubble on a light window and the
//! reverse) so the hint never blends into the content under it.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Style for the tooltip bubble, inverted against the current theme.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (bg_color, text_color) = if theme.extended_palette().is_dark {
        (palette::CHALK, palette::INK)
    } else {
        (palette::INK, palette::CHALK)
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::CONTROL.into(),
            width: border::THIN,
            color: Color {
                a: opacity::OUTLINE,
                ..palette::MUTED
            },
        },
        shadow: shadow::RAISED,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` at `position`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_container_has_text_color() {
        assert!(tooltip_container(&Theme::Light).text_color.is_some());
        assert!(tooltip_container(&Theme::Dark).text_color.is_some());
    }

    #[test]
    fn light_theme_uses_dark_tooltip() {
        let style = tooltip_container(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::INK)));
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        let style = tooltip_container(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::CHALK)));
    }
}
