// SPDX-License-Identifier: MPL-2.0
//! Suggest-a-space dialog. The submission runs asynchronously; the app
//! reports the outcome back through [`State::finish`].

use crate::domain::submission::{is_filled, SpaceSuggestion};
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::form;
use iced::widget::Column;
use iced::Element;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    suggestion: String,
    email: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    SuggestionChanged(String),
    EmailChanged(String),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Cancelled,
    /// Start the submission; the form stays as-is until [`State::finish`].
    Submit(SpaceSuggestion),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && is_filled(&self.suggestion)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SuggestionChanged(value) => self.suggestion = value,
            Message::EmailChanged(value) => self.email = value,
            Message::Cancel => return Event::Cancelled,
            Message::Submit => {
                if !self.can_submit() {
                    return Event::None;
                }
                self.submitting = true;
                return Event::Submit(SpaceSuggestion {
                    suggestion: self.suggestion.clone(),
                    email: self.email.clone(),
                });
            }
        }
        Event::None
    }

    /// Ends a submission. Fields are cleared only when it went through.
    pub fn finish(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.suggestion.clear();
            self.email.clear();
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let submit_label = if self.submitting {
            i18n.tr("submitting")
        } else {
            i18n.tr("submitSuggestion")
        };

        Column::new()
            .spacing(spacing::MD)
            .push(form::title(i18n.tr("suggestSpaceTitle")))
            .push(form::subtitle(i18n.tr("suggestSpaceDescription")))
            .push(form::labeled_input(
                i18n.tr("spaceSuggestionLabel"),
                i18n.tr("spaceSuggestionPlaceholder"),
                &self.suggestion,
                Message::SuggestionChanged,
            ))
            .push(form::labeled_input(
                i18n.tr("optionalEmailLabel"),
                i18n.tr("optionalEmailPlaceholder"),
                &self.email,
                Message::EmailChanged,
            ))
            .push(form::actions(
                submit_label,
                i18n.tr("cancel"),
                self.can_submit(),
                Message::Submit,
                (!self.submitting).then_some(Message::Cancel),
            ))
            .into()
    }
}
