// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared colors, spacing and sizes used by every widget in the app.

## Organization

- **Palette**: Base colors (emerald brand, rose emotions, amber meetups, blue locations)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use story_circle::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand colors (emerald scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.820, 0.980, 0.898);
    pub const PRIMARY_200: Color = Color::from_rgb(0.655, 0.953, 0.816);
    pub const PRIMARY_400: Color = Color::from_rgb(0.204, 0.827, 0.600);
    pub const PRIMARY_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const PRIMARY_600: Color = Color::from_rgb(0.020, 0.588, 0.412);
    pub const PRIMARY_700: Color = Color::from_rgb(0.016, 0.471, 0.341);

    // Emotion tags (rose scale)
    pub const ROSE_100: Color = Color::from_rgb(1.0, 0.894, 0.902);
    pub const ROSE_200: Color = Color::from_rgb(0.996, 0.804, 0.827);
    pub const ROSE_500: Color = Color::from_rgb(0.957, 0.247, 0.369);
    pub const ROSE_800: Color = Color::from_rgb(0.624, 0.071, 0.224);

    // Meetup banner (amber scale)
    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.780);
    pub const AMBER_700: Color = Color::from_rgb(0.706, 0.325, 0.035);

    // Location banner (blue scale)
    pub const BLUE_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const BLUE_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - cards and dialogs
    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const DIALOG_WIDTH: f32 = 520.0;
    pub const DIALOG_WIDE: f32 = 680.0;
    pub const DIALOG_MAX_HEIGHT: f32 = 640.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const STAT_CARD_WIDTH: f32 = 180.0;

    // Window
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;
    pub const WINDOW_MIN_WIDTH: f32 = 480.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale: titles for headings, body for content, caption for badges.

    /// Large title - Page header
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Dialog titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card titles and section headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Tags, badges
    pub const CAPTION: f32 = 12.0;

    /// Stat numbers on the feed
    pub const DISPLAY: f32 = 34.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents and selected cards
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SOFT_BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::DIALOG_WIDE > sizing::DIALOG_WIDTH);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::DIALOG_WIDE);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_colors_are_distinct() {
        assert_ne!(palette::PRIMARY_500, palette::ROSE_500);
        assert_ne!(palette::AMBER_100, palette::BLUE_100);
    }
}
