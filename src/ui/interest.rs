// SPDX-License-Identifier: MPL-2.0
//! "I want to hear more" dialog: collects a first name and a way to reach
//! the reader once a story circle is planned.

use crate::domain::story::Story;
use crate::domain::submission::{is_filled, ContactDetails, ContactMethod, InterestSubmission};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::form;
use iced::widget::{Column, Text};
use iced::Element;

/// Form state. Survives closing the dialog; only a submit clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    contact: ContactDetails,
    name: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    MethodSelected(ContactMethod),
    EmailChanged(String),
    PhoneChanged(String),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Cancelled,
    Submitted(InterestSubmission),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub story: &'a Story,
}

impl State {
    #[must_use]
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A first name plus the field of the selected contact method.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_filled(&self.name) && self.contact.is_complete()
    }

    pub fn update(&mut self, message: Message, story: &Story) -> Event {
        match message {
            Message::NameChanged(name) => self.name = name,
            Message::MethodSelected(method) => self.contact.method = method,
            Message::EmailChanged(email) => self.contact.email = email,
            Message::PhoneChanged(phone) => self.contact.phone = phone,
            Message::Cancel => return Event::Cancelled,
            Message::Submit => {
                if !self.is_valid() {
                    return Event::None;
                }
                let submission = InterestSubmission {
                    story_title: story.title.clone(),
                    story_author: story.author.clone(),
                    contact_method: self.contact.method,
                    email: self.contact.email_or_empty(),
                    phone: self.contact.phone_or_empty(),
                    name: self.name.clone(),
                };
                self.contact.clear();
                self.name.clear();
                return Event::Submitted(submission);
            }
        }
        Event::None
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let author = ctx.story.author.as_str();

        let header = Column::new()
            .spacing(spacing::XXS)
            .push(form::title(i18n.tr("joinTheStoryCircle")))
            .push(Text::new(ctx.story.title.as_str()).size(typography::BODY_LG))
            .push(form::subtitle(
                i18n.tr_with_args("byAuthor", &[("author", author)]),
            ));

        let steps = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("howStoryCirclesWork")).size(typography::BODY))
            .push(step(1, i18n.tr_with_args("storyCircleStep1", &[("author", author)])))
            .push(step(2, i18n.tr_with_args("storyCircleStep2", &[("author", author)])))
            .push(step(3, i18n.tr("storyCircleStep3")));

        let contact = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("howToNotify")).size(typography::BODY_SM))
            .push(form::contact_fields(
                i18n,
                &self.contact,
                Message::MethodSelected,
                Message::EmailChanged,
                Message::PhoneChanged,
            ));

        let meeting_spots = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("meetingSpots")).size(typography::BODY_SM))
            .push(Text::new(i18n.tr("meetingSpotsExamples")).size(typography::CAPTION));

        let privacy = Text::new(format!(
            "{} {}",
            i18n.tr("privacyFirst"),
            i18n.tr_with_args(
                "privacyFirstDetails",
                &[("author", author), ("name", self.name.as_str())]
            )
        ))
        .size(typography::CAPTION);

        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(form::section(steps, palette::BLUE_100, palette::BLUE_700))
            .push(form::labeled_input(
                i18n.tr("yourFirstName"),
                i18n.tr("yourFirstNamePlaceholder"),
                &self.name,
                Message::NameChanged,
            ))
            .push(contact)
            .push(form::section(
                meeting_spots,
                palette::PRIMARY_100,
                palette::PRIMARY_700,
            ))
            .push(privacy)
            .push(form::actions(
                i18n.tr("expressInterest"),
                i18n.tr("cancel"),
                self.is_valid(),
                Message::Submit,
                Some(Message::Cancel),
            ))
            .into()
    }
}

fn step<'a>(number: u8, label: String) -> Element<'a, Message> {
    Text::new(format!("{number}. {label}"))
        .size(typography::BODY_SM)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::sample_stories;

    fn story() -> Story {
        sample_stories().remove(0)
    }

    fn filled(state: &mut State) {
        let story = story();
        state.update(Message::NameChanged("Hodan".into()), &story);
        state.update(Message::EmailChanged("hodan@example.com".into()), &story);
    }

    #[test]
    fn new_state_is_invalid() {
        assert!(!State::default().is_valid());
    }

    #[test]
    fn name_and_selected_contact_make_it_valid() {
        let mut state = State::default();
        filled(&mut state);
        assert!(state.is_valid());
    }

    #[test]
    fn whitespace_name_is_invalid() {
        let mut state = State::default();
        filled(&mut state);
        state.update(Message::NameChanged("   ".into()), &story());
        assert!(!state.is_valid());
    }

    #[test]
    fn switching_method_requires_that_field() {
        let mut state = State::default();
        filled(&mut state);
        state.update(Message::MethodSelected(ContactMethod::Phone), &story());
        assert!(!state.is_valid());
        state.update(Message::PhoneChanged("206-555-0123".into()), &story());
        assert!(state.is_valid());
    }

    #[test]
    fn submit_emits_payload_and_clears_fields() {
        let mut state = State::default();
        let story = story();
        state.update(Message::MethodSelected(ContactMethod::Phone), &story);
        state.update(Message::EmailChanged("left@over.com".into()), &story);
        state.update(Message::PhoneChanged("206-555-0123".into()), &story);
        state.update(Message::NameChanged("Hodan".into()), &story);

        let event = state.update(Message::Submit, &story);

        assert_eq!(
            event,
            Event::Submitted(InterestSubmission {
                story_title: story.title.clone(),
                story_author: story.author.clone(),
                contact_method: ContactMethod::Phone,
                email: String::new(),
                phone: "206-555-0123".into(),
                name: "Hodan".into(),
            })
        );
        assert!(state.name().is_empty());
        assert!(state.contact().email.is_empty());
        assert!(state.contact().phone.is_empty());
        assert_eq!(state.contact().method, ContactMethod::Phone);
    }

    #[test]
    fn invalid_submit_does_nothing() {
        let mut state = State::default();
        state.update(Message::NameChanged("Hodan".into()), &story());
        assert_eq!(state.update(Message::Submit, &story()), Event::None);
        assert_eq!(state.name(), "Hodan");
    }

    #[test]
    fn cancel_keeps_fields() {
        let mut state = State::default();
        filled(&mut state);
        assert_eq!(state.update(Message::Cancel, &story()), Event::Cancelled);
        assert_eq!(state.name(), "Hodan");
        assert!(state.is_valid());
    }
}
