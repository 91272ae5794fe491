// SPDX-License-Identifier: MPL-2.0
//! `settings_panel` is a single-screen settings form built with the Iced GUI
//! framework.
//!
//! The screen offers a notifications toggle, a dark-mode toggle, a font-size
//! slider, a theme selector and a profile picture. Pressing the floating save
//! button shows a transient summary of the current values. Values live only as
//! long as the screen does.
//!
//! # Layout
//!
//! - [`domain`] - Form values and their invariants, free of UI types
//! - [`ui`] - Screen, toasts, styling
//! - [`app`] - Iced application wiring
//! - [`config`] - Launcher configuration (`config.toml`)
//! - [`i18n`] - Fluent localization

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
