// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

The settings panel draws every color, gap and corner from this module.
Tokens are named after the role they play on screen (`ACCENT`, `CARD`,
`POPUP`) rather than after their raw value, so a restyle touches one line.

## Examples

```
use settings_panel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hover = Color {
    a: opacity::HOVER_TINT,
    ..palette::MUTED
};
let card_gap = spacing::MD;
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Floating save button and the selected theme option.
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Toast outline after a save.
    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    /// Toast outline when the configuration could not be used.
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);

    // Neutrals, darkest first
    pub const INK: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAPHITE: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAPHITE_HOVER: Color = Color::from_rgb(0.35, 0.35, 0.35);
    pub const MUTED: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const SMOKE: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const CHALK: Color = Color::from_rgb(0.85, 0.85, 0.85);
}

/// Alpha values applied on top of palette colors.
pub mod opacity {
    pub const HOVER_TINT: f32 = 0.2;
    pub const OUTLINE: f32 = 0.3;
    pub const PRESS_TINT: f32 = 0.5;
    pub const SHADOW: f32 = 0.5;
    /// Setting cards let a little of the window show through.
    pub const CARD: f32 = 0.95;
}

/// 4px steps.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const TOP_BAR_HEIGHT: f32 = 56.0;
    /// Diameter of the floating save button.
    pub const FAB_SIZE: f32 = 56.0;
    /// Avatar in the profile picture row.
    pub const PROFILE_PICTURE: f32 = 48.0;
    /// Width of the theme selector trigger and its option list.
    pub const MENU_WIDTH: f32 = 160.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Top bar heading.
    pub const HEADING: f32 = 20.0;
    /// Name of a setting.
    pub const ROW_TITLE: f32 = 18.0;
    /// Descriptions, control labels, toast text.
    pub const BODY: f32 = 14.0;
    /// Tooltips.
    pub const CAPTION: f32 = 13.0;
}

pub mod border {
    pub const THIN: f32 = 1.0;
    /// Severity outline of a toast.
    pub const THICK: f32 = 2.0;
}

pub mod radius {
    /// Buttons and tooltips.
    pub const CONTROL: f32 = 4.0;
    /// Theme option list and toasts.
    pub const POPUP: f32 = 8.0;
    pub const CARD: f32 = 12.0;
    pub const ROUND: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const FLAT: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Top bar, pressed buttons.
    pub const RESTING: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Popups and the idle save button.
    pub const RAISED: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Hovered save button.
    pub const LIFTED: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::CARD > 0.0 && opacity::CARD < 1.0);
    assert!(opacity::HOVER_TINT < opacity::PRESS_TINT);

    assert!(sizing::FAB_SIZE > sizing::ICON_MD);
    assert!(sizing::PROFILE_PICTURE > sizing::ICON_MD);

    assert!(typography::HEADING > typography::ROW_TITLE);
    assert!(typography::ROW_TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::THICK > border::THIN);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_four_pixel_steps() {
        for step in [spacing::XXS, spacing::XS, spacing::SM, spacing::MD, spacing::LG] {
            assert_eq!(step % 4.0, 0.0, "{step} is off the grid");
        }
    }

    #[test]
    fn save_button_shadow_grows_with_interaction() {
        assert!(shadow::RESTING.blur_radius < shadow::RAISED.blur_radius);
        assert!(shadow::RAISED.blur_radius < shadow::LIFTED.blur_radius);
    }

    #[test]
    fn accent_states_are_distinct() {
        assert_ne!(palette::ACCENT, palette::ACCENT_HOVER);
        assert_ne!(palette::ACCENT, palette::ACCENT_PRESSED);
    }
}
