// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The feed is always drawn; an open dialog is layered above it, and toasts
//! sit on top of everything.

use super::{Dialog, Message};
use crate::i18n::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::modal::modal;
use crate::ui::notifications::{self, Toast};
use crate::ui::{feed, interest, share_story, suggest_space};
use iced::widget::stack;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a feed::State,
    pub dialog: Option<Dialog>,
    pub share_story: &'a share_story::State,
    pub suggest_space: &'a suggest_space::State,
    pub notifications: &'a notifications::Manager,
    pub meetup_threshold: u32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let page = ctx
        .feed
        .view(feed::ViewContext {
            i18n,
            meetup_threshold: ctx.meetup_threshold,
        })
        .map(Message::Feed);

    let page = match ctx.dialog {
        None => page,
        Some(Dialog::ShareStory) => modal(
            page,
            ctx.share_story
                .view(share_story::ViewContext {
                    i18n,
                    location: ctx.feed.location(),
                })
                .map(Message::ShareStory),
            sizing::DIALOG_WIDE,
            Message::CloseDialog,
        ),
        Some(Dialog::SuggestSpace) => modal(
            page,
            ctx.suggest_space
                .view(suggest_space::ViewContext { i18n })
                .map(Message::SuggestSpace),
            sizing::DIALOG_WIDTH,
            Message::CloseDialog,
        ),
        Some(Dialog::Interest(id)) => match ctx.feed.card(id) {
            Some(card) => modal(
                page,
                card.interest()
                    .view(interest::ViewContext {
                        i18n,
                        story: card.story(),
                    })
                    .map(Message::Interest),
                sizing::DIALOG_WIDTH,
                Message::CloseDialog,
            ),
            None => page,
        },
    };

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    stack![page, toasts].into()
}
