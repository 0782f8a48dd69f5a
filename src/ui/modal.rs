// SPDX-License-Identifier: MPL-2.0
//! Modal overlay: dims the page and centers a dialog above it.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{center, container, mouse_area, opaque, scrollable, stack};
use iced::{Element, Length};

/// Stacks `content` over `base`. Clicking the backdrop emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    width: f32,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let dialog = container(scrollable(
        container(content).padding(spacing::LG).width(Length::Fill),
    ))
    .width(Length::Fixed(width))
    .max_height(sizing::DIALOG_MAX_HEIGHT)
    .style(styles::container::dialog);

    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
                .on_press(on_blur)
        )
    ]
    .into()
}
