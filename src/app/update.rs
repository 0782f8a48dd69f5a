// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of
//! [`super::App`] it may touch, and returns the follow-up [`Task`].

use super::{submission, Dialog, Message};
use crate::domain::submission::SpaceSuggestion;
use crate::error::Error;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::{feed, interest, share_story, suggest_space};
use iced::Task;
use std::time::Duration;

pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub feed: &'a mut feed::State,
    pub dialog: &'a mut Option<Dialog>,
    pub share_story: &'a mut share_story::State,
    pub suggest_space: &'a mut suggest_space::State,
    pub notifications: &'a mut notifications::Manager,
    pub submission_delay: Duration,
}

/// Handles feed messages: filters stay inside the feed, the rest open
/// dialogs or switch the language.
pub fn handle_feed_message(ctx: &mut UpdateContext<'_>, message: feed::Message) -> Task<Message> {
    match ctx.feed.update(message) {
        feed::Event::None => {}
        feed::Event::OpenShareStory => *ctx.dialog = Some(Dialog::ShareStory),
        feed::Event::OpenSuggestSpace => *ctx.dialog = Some(Dialog::SuggestSpace),
        feed::Event::OpenInterest(id) => {
            if ctx.feed.card(id).is_some() {
                *ctx.dialog = Some(Dialog::Interest(id));
            } else {
                tracing::warn!(id, "interest requested for an unknown story");
            }
        }
        feed::Event::LanguageSelected(language) => {
            ctx.i18n.set_language(language);
            tracing::debug!(language = %language, "language switched");
        }
    }
    Task::none()
}

pub fn handle_share_story_message(
    ctx: &mut UpdateContext<'_>,
    message: share_story::Message,
) -> Task<Message> {
    match ctx.share_story.update(message, ctx.feed.location()) {
        share_story::Event::None => {}
        share_story::Event::Cancelled => close_dialog(ctx.dialog),
        share_story::Event::Submitted(submission) => {
            tracing::info!(?submission, "story submitted");
            close_dialog(ctx.dialog);
            ctx.notifications
                .push(Notification::success("storySubmitted"));
        }
    }
    Task::none()
}

/// Forwards to the interest form of the story whose dialog is open.
pub fn handle_interest_message(
    ctx: &mut UpdateContext<'_>,
    message: interest::Message,
) -> Task<Message> {
    let Some(Dialog::Interest(id)) = *ctx.dialog else {
        return Task::none();
    };
    let Some(card) = ctx.feed.card_mut(id) else {
        close_dialog(ctx.dialog);
        return Task::none();
    };

    match card.update_interest(message) {
        interest::Event::None => {}
        interest::Event::Cancelled => close_dialog(ctx.dialog),
        interest::Event::Submitted(submission) => {
            tracing::info!(?submission, interested = card.interested(), "interest submitted");
            close_dialog(ctx.dialog);
        }
    }
    Task::none()
}

pub fn handle_suggest_space_message(
    ctx: &mut UpdateContext<'_>,
    message: suggest_space::Message,
) -> Task<Message> {
    match ctx.suggest_space.update(message) {
        suggest_space::Event::None => Task::none(),
        suggest_space::Event::Cancelled => {
            close_dialog(ctx.dialog);
            Task::none()
        }
        suggest_space::Event::Submit(payload) => Task::perform(
            submission::submit_space_suggestion(payload, ctx.submission_delay),
            Message::SuggestionFinished,
        ),
    }
}

pub fn handle_suggestion_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<SpaceSuggestion, Error>,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.suggest_space.finish(true);
            ctx.notifications.dismiss_key("suggestionError");
            ctx.notifications
                .push(Notification::success("suggestionSuccess"));
            if *ctx.dialog == Some(Dialog::SuggestSpace) {
                close_dialog(ctx.dialog);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "space suggestion failed");
            ctx.suggest_space.finish(false);
            ctx.notifications.push(Notification::error("suggestionError"));
        }
    }
    Task::none()
}

fn close_dialog(dialog: &mut Option<Dialog>) {
    *dialog = None;
}
