// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are SVG files from `assets/icons/`, embedded at compile time via
//! `include_bytes!`. Handles are cached using `OnceLock` so the bytes are
//! parsed once per process.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `heart` not `save`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Actions
// =============================================================================

define_icon!(heart, "heart.svg", "Filled heart, white.");
define_icon!(
    chevron_down,
    "chevron_down.svg",
    "Chevron pointing down: dropdown indicator."
);
define_icon!(cross, "cross.svg", "Cross (X) for closing.");

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(checkmark, "checkmark.svg", "Green disc with a checkmark.");
define_icon!(
    warning,
    "warning.svg",
    "Amber triangle with an exclamation mark."
);

// =============================================================================
// Pictures
// =============================================================================

define_icon!(
    profile_picture,
    "profile_picture.svg",
    "Placeholder avatar shown as the profile picture."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Sets both width and height of an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
