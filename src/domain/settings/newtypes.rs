// SPDX-License-Identifier: MPL-2.0
//! Settings newtypes.
//!
//! This module provides type-safe wrappers for form values,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// Font Size Bounds
// =============================================================================

/// Font size bounds (12 to 24).
pub mod font_size_bounds {
    /// Smallest selectable font size.
    pub const MIN: f32 = 12.0;
    /// Largest selectable font size.
    pub const MAX: f32 = 24.0;
    /// Font size when the screen is created.
    pub const DEFAULT: f32 = 16.0;
    /// Slider increment. A power of two keeps every reachable value exact in `f32`.
    pub const STEP: f32 = 0.5;
}

const _: () = {
    assert!(font_size_bounds::MIN > 0.0);
    assert!(font_size_bounds::MAX > font_size_bounds::MIN);
    assert!(font_size_bounds::DEFAULT >= font_size_bounds::MIN);
    assert!(font_size_bounds::DEFAULT <= font_size_bounds::MAX);
    assert!(font_size_bounds::STEP > 0.0);
};

// =============================================================================
// FontSize
// =============================================================================

/// Font size, guaranteed to be within valid range (12–24).
///
/// This type ensures that font size values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize(f32);

impl FontSize {
    /// Creates a new font size, clamping the value to the valid range.
    ///
    /// NaN collapses to the default instead of propagating.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(font_size_bounds::MIN, font_size_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_size_bounds::DEFAULT)
    }
}

/// Always prints at least one fractional digit (`16.0`, `16.5`).
impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
