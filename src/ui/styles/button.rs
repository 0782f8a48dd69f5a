// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

fn disabled_style(theme: &Theme, corner: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light(theme) {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main call to action (share, submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme, radius::MD),
    }
}

/// Selected state in toggle groups (language, contact method).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme, radius::SM),
    }
}

/// Unselected or secondary actions (cancel, outline buttons).
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let (bg_color, text_color) = if is_light(theme) {
        (palette::WHITE, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light(theme) {
                palette::GRAY_100
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled_style(theme, radius::SM),
    }
}

/// Pill-shaped emotion tag; filled rose when `active`.
pub fn emotion_chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (palette::ROSE_500, WHITE),
            (false, button::Status::Hovered) => (palette::ROSE_100, palette::ROSE_800),
            (false, _) => (WHITE, palette::ROSE_800),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette::ROSE_200,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable card (story prompts); outlined in brand color when `active`.
pub fn card(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base;
        let border_color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_200,
            (false, _) => palette::GRAY_200,
        };
        let background = if active {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_200
            }
        } else {
            base.color
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: base.text,
            border: Border {
                color: border_color,
                width: if active {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::LG.into(),
            },
            shadow: if active { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Borderless icon button (dismiss, remove tag).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_grayed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn active_emotion_chip_is_filled() {
        let active = emotion_chip(true)(&Theme::Light, button::Status::Active);
        let inactive = emotion_chip(false)(&Theme::Light, button::Status::Active);
        assert_eq!(active.background, Some(Background::Color(palette::ROSE_500)));
        assert_ne!(active.background, inactive.background);
    }

    #[test]
    fn active_card_has_thicker_border() {
        let active = card(true)(&Theme::Light, button::Status::Active);
        let inactive = card(false)(&Theme::Light, button::Status::Active);
        assert!(active.border.width > inactive.border.width);
    }

    #[test]
    fn ghost_button_is_transparent_until_hovered() {
        assert!(ghost(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(ghost(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
