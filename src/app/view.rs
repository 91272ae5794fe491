// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{State as SettingsState, ViewContext as SettingsViewContext};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings: &'a SettingsState,
    pub notifications: &'a Manager,
}

/// Renders the settings screen with the toast layer on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = ctx
        .settings
        .view(SettingsViewContext { i18n: ctx.i18n })
        .map(Message::Settings);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(toasts)
        .into()
}
