// SPDX-License-Identifier: MPL-2.0
//! Segmented control for switching the display language.

use crate::i18n::{I18n, Language};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment::Vertical, Element};

/// Renders one button per supported language; the active one is highlighted.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Language> {
    let current = i18n.current_language();

    let label = Text::new(i18n.tr("languageLabel")).size(typography::BODY_SM);

    Language::ALL
        .iter()
        .fold(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(label),
            |row, &language| {
                let style = if language == current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                row.push(
                    button(Text::new(language.native_name()).size(typography::BODY_SM))
                        .on_press(language)
                        .padding([spacing::XXS, spacing::XS])
                        .style(style),
                )
            },
        )
        .into()
}
