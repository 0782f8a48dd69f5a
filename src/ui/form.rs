// SPDX-License-Identifier: MPL-2.0
//! Form building blocks shared by the dialogs.

use crate::domain::submission::{ContactDetails, ContactMethod};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{Color, Element, Length};

/// Dialog heading.
pub fn title<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::TITLE_MD).into()
}

/// Secondary line under a heading.
pub fn subtitle<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY_SM)
        .color(palette::GRAY_400)
        .into()
}

/// Label above a single-line input.
pub fn labeled_input<'a, Message>(
    label: String,
    placeholder: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            text_input(&placeholder, value)
                .on_input(on_input)
                .padding(spacing::XS)
                .size(typography::BODY),
        )
        .into()
}

/// Tinted box grouping related fields.
pub fn section<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    background: Color,
    text_color: Color,
) -> Element<'a, Message> {
    container(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::tinted(background, text_color))
        .into()
}

/// "Email / Text" toggle followed by the matching input.
pub fn contact_fields<'a, Message>(
    i18n: &I18n,
    contact: &ContactDetails,
    on_method: impl Fn(ContactMethod) -> Message,
    on_email: impl Fn(String) -> Message + 'a,
    on_phone: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let methods = [ContactMethod::Email, ContactMethod::Phone].into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, method| {
            let style = if method == contact.method {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(i18n.tr(method.label_key())).size(typography::BODY_SM))
                    .on_press(on_method(method))
                    .width(Length::Fill)
                    .style(style),
            )
        },
    );

    let input = match contact.method {
        ContactMethod::Email => labeled_input(
            i18n.tr("emailAddress"),
            i18n.tr("emailPlaceholder"),
            &contact.email,
            on_email,
        ),
        ContactMethod::Phone => labeled_input(
            i18n.tr("phoneNumber"),
            i18n.tr("phonePlaceholder"),
            &contact.phone,
            on_phone,
        ),
    };

    Column::new()
        .spacing(spacing::XS)
        .push(methods)
        .push(input)
        .into()
}

/// Submit and cancel buttons; submit is disabled unless `enabled`.
pub fn actions<'a, Message>(
    submit_label: String,
    cancel_label: String,
    enabled: bool,
    on_submit: Message,
    on_cancel: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let submit = button(Text::new(submit_label))
        .on_press_maybe(enabled.then_some(on_submit))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::primary);

    let cancel = button(Text::new(cancel_label))
        .on_press_maybe(on_cancel)
        .padding(spacing::XS)
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::XS)
        .push(submit)
        .push(cancel)
        .into()
}
