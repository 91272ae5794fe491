// SPDX-License-Identifier: MPL-2.0
//! Reusable card layout for a single setting.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Renders one setting as a card: title, description, then the control
/// aligned to the right edge beneath them.
pub fn setting_row<'a, Message: 'a>(
    title: String,
    description: String,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::ROW_TITLE))
        .push(Text::new(description).size(typography::BODY))
        .push(
            Container::new(control)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Space;

    #[test]
    fn setting_row_accepts_any_control() {
        let _row: Element<'_, ()> =
            setting_row("Title".into(), "Description".into(), Space::new());
        let _text_row: Element<'_, ()> =
            setting_row("Title".into(), String::new(), Text::new("value"));
    }
}
