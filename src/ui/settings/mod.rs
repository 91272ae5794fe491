// SPDX-License-Identifier: MPL-2.0
//! Settings screen: the form itself.
//!
//! The screen owns the four form values and whether the theme selector is
//! open. Edits stay local to [`State`]; pressing the floating save button
//! emits [`Event::Saved`] with a snapshot so the application can confirm it.
//! Dropping the state discards every edit.
//!
//! # Examples
//!
//! ```
//! use settings_panel::ui::settings::{Event, Message, State};
//!
//! let mut state = State::default();
//! state.update(Message::NotificationsToggled(false));
//!
//! match state.update(Message::Save) {
//!     Event::Saved(snapshot) => assert!(!snapshot.notifications_enabled),
//!     Event::None => unreachable!(),
//! }
//! ```

pub mod row;

use crate::domain::settings::{font_size_bounds, FontSize, Settings, ThemeMode};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::tooltip::Position;
use iced::widget::{
    button, container, scrollable, slider, toggler, Column, Container, Row, Space, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding,
};
use row::setting_row;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    NotificationsToggled(bool),
    DarkModeToggled(bool),
    FontSizeChanged(f32),
    /// Opens the theme selector, or closes it if open.
    ThemeMenuToggled,
    /// Closes the theme selector without changing the selection.
    ThemeMenuDismissed,
    ThemeSelected(ThemeMode),
    Save,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user pressed save; carries the values at that moment.
    Saved(Settings),
}

/// Local state of the settings form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    settings: Settings,
    theme_menu_open: bool,
}

impl State {
    /// Returns a snapshot of the current form values.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn is_theme_menu_open(&self) -> bool {
        self.theme_menu_open
    }

    /// Applies a message and reports what the parent should react to.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            // Touching another row closes the theme selector, like a tap
            // outside a dropdown.
            Message::NotificationsToggled(enabled) => {
                tracing::debug!(enabled, "notifications toggled");
                self.settings.notifications_enabled = enabled;
                self.theme_menu_open = false;
            }
            Message::DarkModeToggled(enabled) => {
                tracing::debug!(enabled, "dark mode toggled");
                self.settings.dark_mode_enabled = enabled;
                self.theme_menu_open = false;
            }
            Message::FontSizeChanged(value) => {
                self.settings.font_size = FontSize::new(value);
                self.theme_menu_open = false;
                tracing::debug!(font_size = %self.settings.font_size, "font size changed");
            }
            Message::ThemeMenuToggled => {
                self.theme_menu_open = !self.theme_menu_open;
            }
            Message::ThemeMenuDismissed => {
                self.theme_menu_open = false;
            }
            Message::ThemeSelected(mode) => {
                tracing::debug!(theme = %mode, "theme selected");
                self.settings.selected_theme = mode;
                self.theme_menu_open = false;
            }
            Message::Save => {
                self.theme_menu_open = false;
                return Event::Saved(self.settings);
            }
        }
        Event::None
    }

    /// Renders the title bar, the setting cards and the floating save button.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let rows = Column::new()
            .spacing(spacing::MD)
            .padding(Padding {
                // Keeps the last card reachable above the floating button.
                bottom: sizing::FAB_SIZE + spacing::LG * 2.0,
                ..Padding::new(spacing::MD)
            })
            .push(setting_row(
                i18n.tr("setting-notifications-title"),
                i18n.tr("setting-notifications-description"),
                toggler(self.settings.notifications_enabled)
                    .on_toggle(Message::NotificationsToggled),
            ))
            .push(setting_row(
                i18n.tr("setting-dark-mode-title"),
                i18n.tr("setting-dark-mode-description"),
                toggler(self.settings.dark_mode_enabled).on_toggle(Message::DarkModeToggled),
            ))
            .push(setting_row(
                i18n.tr("setting-font-size-title"),
                i18n.tr("setting-font-size-description"),
                self.font_size_control(i18n),
            ))
            .push(setting_row(
                i18n.tr("setting-theme-title"),
                i18n.tr("setting-theme-description"),
                self.theme_selector(i18n),
            ))
            .push(setting_row(
                i18n.tr("setting-profile-picture-title"),
                i18n.tr("setting-profile-picture-description"),
                icons::sized(icons::profile_picture(), sizing::PROFILE_PICTURE),
            ));

        let body = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(top_bar(i18n))
            .push(scrollable(rows).height(Length::Fill));

        let fab_layer = Container::new(save_button(i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::LG);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(body)
            .push(fab_layer)
            .into()
    }

    fn font_size_control<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let size = self.settings.font_size;
        let label = i18n.tr_with_args("setting-font-size-value", &[("size", &size.to_string())]);

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                slider(
                    font_size_bounds::MIN..=font_size_bounds::MAX,
                    size.value(),
                    Message::FontSizeChanged,
                )
                .step(font_size_bounds::STEP),
            )
            .push(Text::new(label).size(typography::BODY))
            .into()
    }

    fn theme_selector<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let current = self.settings.selected_theme;

        let trigger_content = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr(current.i18n_key())).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(icons::sized(icons::chevron_down(), sizing::ICON_SM));

        let trigger = button(trigger_content)
            .on_press(Message::ThemeMenuToggled)
            .width(Length::Fixed(sizing::MENU_WIDTH))
            .padding([spacing::XXS, spacing::SM])
            .style(if self.theme_menu_open {
                styles::button::selected
            } else {
                styles::button::unselected
            });

        let mut selector = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Right)
            .push(trigger);

        if self.theme_menu_open {
            let options = ThemeMode::ALL.iter().fold(
                Column::new().spacing(spacing::XXS),
                |column, &mode| {
                    let option = button(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY))
                        .on_press(Message::ThemeSelected(mode))
                        .width(Length::Fill)
                        .padding([spacing::XXS, spacing::SM])
                        .style(if mode == current {
                            styles::button::selected
                        } else {
                            styles::button::menu_item
                        });
                    column.push(option)
                },
            );

            selector = selector.push(
                container(options)
                    .width(Length::Fixed(sizing::MENU_WIDTH))
                    .padding(spacing::XXS)
                    .style(styles::container::menu),
            );
        }

        selector.into()
    }
}

fn top_bar<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("settings-title")).size(typography::HEADING))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::top_bar)
        .into()
}

fn save_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let fab = button(icons::sized(icons::heart(), sizing::ICON_MD))
        .on_press(Message::Save)
        .padding((sizing::FAB_SIZE - sizing::ICON_MD) / 2.0)
        .style(styles::button::fab);

    styles::tooltip::styled(fab, i18n.tr("save-button-tooltip"), Position::Left).into()
}
