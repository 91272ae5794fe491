// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns a `State`, turns its `Message`s into `Event`s for the parent,
//! and renders from a `ViewContext`.
//!
//! # Screens
//!
//! - [`settings`] - The settings form
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System window theme
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
