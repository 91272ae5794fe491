// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored outline, an icon, the
//! localized message and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Toast rendering entry points.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let icon_widget = icons::sized(Self::severity_icon(severity), sizing::ICON_MD);

        let message_widget = Text::new(notification.text(i18n)).size(typography::BODY);

        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon_widget)
            .push(Container::new(message_widget).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders all visible toasts stacked in the bottom-right corner,
    /// lifted above the floating save button.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let toasts = Column::with_children(
            manager
                .visible()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(Padding {
                bottom: sizing::FAB_SIZE + spacing::MD * 2.0,
                ..Padding::new(spacing::MD)
            })
            .into()
    }

    fn severity_icon(severity: Severity) -> Svg<'static> {
        match severity {
            Severity::Success => icons::checkmark(),
            Severity::Warning => icons::warning(),
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::THICK,
            radius: radius::POPUP.into(),
        },
        shadow: shadow::RAISED,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::HOVER_TINT),
        button::Status::Pressed => Some(opacity::PRESS_TINT),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::MUTED
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::CONTROL.into(),
            ..Default::default()
        },
        shadow: shadow::FLAT,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS;
        let style = toast_container_style(&Theme::Dark, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_flat_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager, &i18n);

        manager.push(Notification::confirmation("Settings saved"));
        manager.push(Notification::warning("notification-config-parse-error"));
        let _ = Toast::view_overlay(&manager, &i18n);
    }
}
