// SPDX-License-Identifier: MPL-2.0
//! Share-story dialog: prompts, word bank, emotion tags, residency and
//! optional meetup notifications.

use crate::domain::location::LocationPrompts;
use crate::domain::prompt::{append_word, prompts_for, StoryPrompt, PREDEFINED_EMOTIONS, WORD_BANK};
use crate::domain::submission::{
    is_filled, ContactDetails, ContactMethod, EmotionTag, Residency, StorySubmission,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::form;
use crate::ui::styles;
use iced::widget::{button, radio, text_editor, text_input, toggler, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};
use std::fmt;

const EDITOR_HEIGHT: f32 = 120.0;

pub struct State {
    selected_prompt: Option<usize>,
    /// Plain-text mirror of `editor`, updated on every edit.
    story: String,
    editor: text_editor::Content,
    author_name: String,
    is_anonymous: bool,
    wants_meetup_notifications: bool,
    residency: Residency,
    current_location: String,
    emotion_tags: Vec<EmotionTag>,
    custom_tag: String,
    contact: ContactDetails,
}

impl Default for State {
    fn default() -> Self {
        Self {
            selected_prompt: None,
            story: String::new(),
            editor: text_editor::Content::new(),
            author_name: String::new(),
            is_anonymous: false,
            wants_meetup_notifications: false,
            residency: Residency::default(),
            current_location: String::new(),
            emotion_tags: Vec::new(),
            custom_tag: String::new(),
            contact: ContactDetails::default(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("share_story::State")
            .field("selected_prompt", &self.selected_prompt)
            .field("story_len", &self.story.len())
            .field("is_anonymous", &self.is_anonymous)
            .field("residency", &self.residency)
            .field("emotion_tags", &self.emotion_tags)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PromptToggled(usize),
    StoryEdited(text_editor::Action),
    WordPicked(&'static str),
    EmotionToggled(&'static str),
    CustomTagChanged(String),
    AddCustomTag,
    RemoveCustomTag(String),
    AuthorNameChanged(String),
    AnonymousToggled(bool),
    ResidencySelected(Residency),
    CurrentLocationChanged(String),
    NotificationsToggled(bool),
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
    Submitted(StorySubmission),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: Option<&'a LocationPrompts>,
}

impl State {
    #[must_use]
    pub fn story(&self) -> &str {
        &self.story
    }

    #[must_use]
    pub fn selected_prompt(&self) -> Option<usize> {
        self.selected_prompt
    }

    #[must_use]
    pub fn emotion_tags(&self) -> &[EmotionTag] {
        &self.emotion_tags
    }

    #[must_use]
    pub fn custom_tag(&self) -> &str {
        &self.custom_tag
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    #[must_use]
    pub fn residency(&self) -> Residency {
        self.residency
    }

    /// Contact fields are only offered to storytellers who give a name.
    #[must_use]
    pub fn shows_contact_section(&self) -> bool {
        !self.is_anonymous
    }

    #[must_use]
    pub fn shows_location_field(&self) -> bool {
        self.residency.asks_for_location()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_filled(&self.story)
            && (!self.wants_meetup_notifications || self.contact.is_complete())
            && (!self.residency.asks_for_location() || is_filled(&self.current_location))
    }

    fn set_story(&mut self, story: String) {
        self.editor = text_editor::Content::with_text(&story);
        self.story = story;
    }

    fn has_predefined(&self, key: &str) -> bool {
        self.emotion_tags
            .iter()
            .any(|tag| matches!(tag, EmotionTag::Predefined(k) if *k == key))
    }

    fn add_custom_tag(&mut self) {
        let tag = self.custom_tag.trim();
        if tag.is_empty() {
            return;
        }
        let duplicate = self.emotion_tags.iter().any(|existing| match existing {
            EmotionTag::Predefined(key) => *key == tag,
            EmotionTag::Custom(text) => text == tag,
        });
        if !duplicate {
            self.emotion_tags.push(EmotionTag::Custom(tag.to_string()));
            self.custom_tag.clear();
        }
    }

    fn submission(&self, location: Option<&LocationPrompts>) -> StorySubmission {
        let notify = self.wants_meetup_notifications;
        StorySubmission {
            selected_prompt: self.selected_prompt,
            story: self.story.clone(),
            author_name: self.author_name.clone(),
            is_anonymous: self.is_anonymous,
            wants_meetup_notifications: notify,
            residency: self.residency,
            current_location: self
                .residency
                .asks_for_location()
                .then(|| self.current_location.clone()),
            emotion_tags: self.emotion_tags.clone(),
            contact_method: notify.then_some(self.contact.method),
            email: if notify {
                self.contact.email_or_empty()
            } else {
                String::new()
            },
            phone: if notify {
                self.contact.phone_or_empty()
            } else {
                String::new()
            },
            location: location.map(|context| context.name.to_string()),
        }
    }

    pub fn update(&mut self, message: Message, location: Option<&LocationPrompts>) -> Event {
        match message {
            Message::PromptToggled(index) => {
                self.selected_prompt = if self.selected_prompt == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            Message::StoryEdited(action) => {
                self.editor.perform(action);
                self.story = self.editor.text();
            }
            Message::WordPicked(word) => {
                let story = append_word(&self.story, word);
                self.set_story(story);
            }
            Message::EmotionToggled(key) => {
                if self.has_predefined(key) {
                    self.emotion_tags
                        .retain(|tag| !matches!(tag, EmotionTag::Predefined(k) if *k == key));
                } else {
                    self.emotion_tags.push(EmotionTag::Predefined(key));
                }
            }
            Message::CustomTagChanged(value) => self.custom_tag = value,
            Message::AddCustomTag => self.add_custom_tag(),
            Message::RemoveCustomTag(text) => {
                self.emotion_tags
                    .retain(|tag| !matches!(tag, EmotionTag::Custom(t) if *t == text));
            }
            Message::AuthorNameChanged(name) => self.author_name = name,
            Message::AnonymousToggled(anonymous) => self.is_anonymous = anonymous,
            Message::ResidencySelected(residency) => self.residency = residency,
            Message::CurrentLocationChanged(value) => self.current_location = value,
            Message::NotificationsToggled(wanted) => self.wants_meetup_notifications = wanted,
            Message::MethodSelected(method) => self.contact.method = method,
            Message::EmailChanged(email) => self.contact.email = email,
            Message::PhoneChanged(phone) => self.contact.phone = phone,
            Message::Cancel => return Event::Cancelled,
            Message::Submit => {
                if !self.is_valid() {
                    return Event::None;
                }
                let submission = self.submission(location);
                *self = Self::default();
                return Event::Submitted(submission);
            }
        }
        Event::None
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let mut title_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(form::title(i18n.tr("shareStoryDialogTitle")));
        let (subtitle, prompts_title) = match ctx.location {
            Some(context) => {
                title_row = title_row.push(tag_pill(format!("📍 {}", context.name)));
                let args = [("locationName", context.name)];
                (
                    i18n.tr_with_args("shareStoryDialogLocationPrompt", &args),
                    i18n.tr_with_args("storyPromptsTitleLocation", &args),
                )
            }
            None => (
                i18n.tr("shareStoryDialogDefaultPrompt"),
                i18n.tr("storyPromptsTitle"),
            ),
        };

        let prompts = prompts_for(ctx.location)
            .into_iter()
            .enumerate()
            .fold(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(prompts_title).size(typography::BODY_LG)),
                |column, (index, prompt)| {
                    column.push(self.prompt_card(i18n, index, prompt))
                },
            );

        let story = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("yourStoryLabel")).size(typography::BODY_LG))
            .push(
                text_editor(&self.editor)
                    .placeholder(i18n.tr("yourStoryPlaceholder"))
                    .on_action(Message::StoryEdited)
                    .height(Length::Fixed(EDITOR_HEIGHT)),
            );

        let word_bank = WORD_BANK.iter().fold(Row::new().spacing(spacing::XXS), |row, &word| {
            row.push(
                button(Text::new(word).size(typography::CAPTION))
                    .on_press(Message::WordPicked(word))
                    .padding([2.0, spacing::XS])
                    .style(styles::button::unselected),
            )
        });
        let word_bank = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("wordBankTitle")).size(typography::BODY))
            .push(word_bank.wrap());

        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(title_row)
            .push(form::subtitle(subtitle))
            .push(prompts)
            .push(story)
            .push(form::section(word_bank, palette::BLUE_100, palette::GRAY_900))
            .push(form::section(
                self.emotion_section(i18n),
                palette::ROSE_100,
                palette::GRAY_900,
            ))
            .push(form::labeled_input(
                i18n.tr("howToBeKnown"),
                i18n.tr("howToBeKnownPlaceholder"),
                &self.author_name,
                Message::AuthorNameChanged,
            ))
            .push(
                toggler(self.is_anonymous)
                    .label(i18n.tr("shareAnonymouslyCheckbox"))
                    .on_toggle(Message::AnonymousToggled),
            )
            .push(self.residency_section(i18n));

        if self.shows_contact_section() {
            content = content.push(form::section(
                self.meetup_section(i18n),
                palette::PRIMARY_100,
                palette::GRAY_900,
            ));
        }

        content
            .push(
                Text::new(format!(
                    "{} {}",
                    i18n.tr("yourSafetyMatters"),
                    i18n.tr("yourSafetyMattersDetails")
                ))
                .size(typography::CAPTION),
            )
            .push(form::actions(
                i18n.tr("shareMyStory"),
                i18n.tr("cancel"),
                self.is_valid(),
                Message::Submit,
                Some(Message::Cancel),
            ))
            .into()
    }

    fn prompt_card<'a>(
        &self,
        i18n: &I18n,
        index: usize,
        prompt: StoryPrompt,
    ) -> Element<'a, Message> {
        let body = Row::new()
            .spacing(spacing::SM)
            .push(Text::new(prompt.icon.glyph()).size(typography::TITLE_SM))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(i18n.tr(prompt.keys.title_key)).size(typography::BODY))
                    .push(
                        Text::new(i18n.tr(prompt.keys.description_key))
                            .size(typography::BODY_SM),
                    ),
            );

        button(body)
            .on_press(Message::PromptToggled(index))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::card(self.selected_prompt == Some(index)))
            .into()
    }

    fn emotion_section<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let predefined = PREDEFINED_EMOTIONS.iter().fold(
            Row::new().spacing(spacing::XXS),
            |row, &key| {
                row.push(
                    button(Text::new(i18n.tr(key)).size(typography::CAPTION))
                        .on_press(Message::EmotionToggled(key))
                        .padding([2.0, spacing::XS])
                        .style(styles::button::emotion_chip(self.has_predefined(key))),
                )
            },
        );

        let custom = self
            .emotion_tags
            .iter()
            .filter_map(|tag| match tag {
                EmotionTag::Custom(text) => Some(text),
                EmotionTag::Predefined(_) => None,
            })
            .fold(Row::new().spacing(spacing::XXS), |row, text| {
                row.push(
                    button(Text::new(format!("{text} ×")).size(typography::CAPTION))
                        .on_press(Message::RemoveCustomTag(text.clone()))
                        .padding([2.0, spacing::XS])
                        .style(styles::button::emotion_chip(true)),
                )
            });

        let add_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                text_input(&i18n.tr("addYourOwn"), &self.custom_tag)
                    .on_input(Message::CustomTagChanged)
                    .on_submit(Message::AddCustomTag)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            )
            .push(
                button(Text::new(i18n.tr("addTag")).size(typography::BODY_SM))
                    .on_press(Message::AddCustomTag)
                    .style(styles::button::unselected),
            );

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("emotionTagsTitle")).size(typography::BODY))
            .push(Text::new(i18n.tr("emotionTagsDescription")).size(typography::BODY_SM))
            .push(predefined.wrap())
            .push(custom.wrap())
            .push(add_row)
            .into()
    }

    fn residency_section<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let options = Residency::ALL.iter().fold(
            Column::new().spacing(spacing::XS),
            |column, &residency| {
                column.push(
                    radio(
                        i18n.tr(residency.label_key()),
                        residency,
                        Some(self.residency),
                        Message::ResidencySelected,
                    )
                    .size(16.0)
                    .text_size(typography::BODY),
                )
            },
        );

        let mut section = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("livesInNeighborhoodQuestion")).size(typography::BODY))
            .push(options);

        if self.shows_location_field() {
            section = section.push(form::labeled_input(
                i18n.tr("whereDoYouLiveNowQuestion"),
                i18n.tr("whereDoYouLiveNowPlaceholder"),
                &self.current_location,
                Message::CurrentLocationChanged,
            ));
        }

        section.into()
    }

    fn meetup_section<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let mut section = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("wantToMeet")).size(typography::BODY))
            .push(Text::new(i18n.tr("wantToMeetDescription")).size(typography::BODY_SM))
            .push(
                toggler(self.wants_meetup_notifications)
                    .label(i18n.tr("notifyMeCheckbox"))
                    .on_toggle(Message::NotificationsToggled),
            );

        if self.wants_meetup_notifications {
            section = section
                .push(Text::new(i18n.tr("howShouldWeNotifyYou")).size(typography::BODY_SM))
                .push(form::contact_fields(
                    i18n,
                    &self.contact,
                    Message::MethodSelected,
                    Message::EmailChanged,
                    Message::PhoneChanged,
                ))
                .push(Text::new(i18n.tr("notificationHint")).size(typography::CAPTION));
        }

        section.into()
    }
}

fn tag_pill<'a>(label: String) -> Element<'a, Message> {
    iced::widget::container(Text::new(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::tag(palette::PRIMARY_100, palette::PRIMARY_700))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::location_prompts;

    fn send(state: &mut State, message: Message) -> Event {
        state.update(message, None)
    }

    fn with_story() -> State {
        let mut state = State::default();
        send(&mut state, Message::WordPicked("Hope"));
        state
    }

    #[test]
    fn default_state_is_invalid() {
        assert!(!State::default().is_valid());
    }

    #[test]
    fn word_bank_appends_with_space() {
        let mut state = with_story();
        assert_eq!(state.story(), "Hope");
        send(&mut state, Message::WordPicked("Neighbors"));
        assert_eq!(state.story(), "Hope Neighbors");
        assert!(state.is_valid());
    }

    #[test]
    fn prompt_selection_toggles() {
        let mut state = State::default();
        send(&mut state, Message::PromptToggled(1));
        assert_eq!(state.selected_prompt(), Some(1));
        send(&mut state, Message::PromptToggled(2));
        assert_eq!(state.selected_prompt(), Some(2));
        send(&mut state, Message::PromptToggled(2));
        assert_eq!(state.selected_prompt(), None);
    }

    #[test]
    fn predefined_emotions_toggle() {
        let mut state = State::default();
        send(&mut state, Message::EmotionToggled("Joy"));
        send(&mut state, Message::EmotionToggled("Pride"));
        send(&mut state, Message::EmotionToggled("Joy"));
        assert_eq!(state.emotion_tags(), &[EmotionTag::Predefined("Pride")]);
    }

    #[test]
    fn custom_tag_is_trimmed_and_input_cleared() {
        let mut state = State::default();
        send(&mut state, Message::CustomTagChanged("  Nostalgia ".into()));
        send(&mut state, Message::AddCustomTag);
        assert_eq!(state.emotion_tags(), &[EmotionTag::Custom("Nostalgia".into())]);
        assert!(state.custom_tag().is_empty());
    }

    #[test]
    fn blank_or_duplicate_custom_tags_are_ignored() {
        let mut state = State::default();
        send(&mut state, Message::CustomTagChanged("   ".into()));
        send(&mut state, Message::AddCustomTag);
        assert!(state.emotion_tags().is_empty());

        send(&mut state, Message::CustomTagChanged("Nostalgia".into()));
        send(&mut state, Message::AddCustomTag);
        send(&mut state, Message::CustomTagChanged("Nostalgia".into()));
        send(&mut state, Message::AddCustomTag);
        assert_eq!(state.emotion_tags().len(), 1);
        assert_eq!(state.custom_tag(), "Nostalgia");
    }

    #[test]
    fn custom_tag_matching_selected_emotion_is_ignored() {
        let mut state = State::default();
        send(&mut state, Message::EmotionToggled("Joy"));
        send(&mut state, Message::CustomTagChanged("Joy".into()));
        send(&mut state, Message::AddCustomTag);
        assert_eq!(state.emotion_tags(), &[EmotionTag::Predefined("Joy")]);
    }

    #[test]
    fn custom_tag_can_be_removed() {
        let mut state = State::default();
        send(&mut state, Message::CustomTagChanged("Nostalgia".into()));
        send(&mut state, Message::AddCustomTag);
        send(&mut state, Message::RemoveCustomTag("Nostalgia".into()));
        assert!(state.emotion_tags().is_empty());
    }

    #[test]
    fn anonymous_hides_contact_section() {
        let mut state = State::default();
        assert!(state.shows_contact_section());
        send(&mut state, Message::AnonymousToggled(true));
        assert!(!state.shows_contact_section());
    }

    #[test]
    fn non_residents_must_say_where_they_live() {
        let mut state = with_story();
        assert!(!state.shows_location_field());

        send(&mut state, Message::ResidencySelected(Residency::Former));
        assert!(state.shows_location_field());
        assert!(!state.is_valid());

        send(&mut state, Message::CurrentLocationChanged("Tukwila".into()));
        assert!(state.is_valid());

        send(&mut state, Message::ResidencySelected(Residency::Current));
        assert!(!state.shows_location_field());
        assert!(state.is_valid());
    }

    #[test]
    fn notifications_require_selected_contact() {
        let mut state = with_story();
        send(&mut state, Message::NotificationsToggled(true));
        assert!(!state.is_valid());

        send(&mut state, Message::PhoneChanged("206-555-0123".into()));
        assert!(!state.is_valid());

        send(&mut state, Message::MethodSelected(ContactMethod::Phone));
        assert!(state.is_valid());
    }

    #[test]
    fn invalid_submit_is_ignored() {
        let mut state = State::default();
        assert_eq!(send(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn submit_builds_payload_and_resets() {
        let context = location_prompts("seward-park").expect("known slug");
        let mut state = with_story();
        for message in [
            Message::PromptToggled(0),
            Message::AuthorNameChanged("Amina".into()),
            Message::ResidencySelected(Residency::Visitor),
            Message::CurrentLocationChanged("Renton".into()),
            Message::EmotionToggled("Gratitude"),
            Message::NotificationsToggled(true),
            Message::MethodSelected(ContactMethod::Phone),
            Message::EmailChanged("ignored@example.com".into()),
            Message::PhoneChanged("206-555-0123".into()),
        ] {
            state.update(message, Some(&context));
        }

        let event = state.update(Message::Submit, Some(&context));

        let Event::Submitted(submission) = event else {
            panic!("expected a submission");
        };
        assert_eq!(submission.selected_prompt, Some(0));
        assert_eq!(submission.story, "Hope");
        assert_eq!(submission.author_name, "Amina");
        assert_eq!(submission.residency, Residency::Visitor);
        assert_eq!(submission.current_location.as_deref(), Some("Renton"));
        assert_eq!(submission.emotion_tags, vec![EmotionTag::Predefined("Gratitude")]);
        assert_eq!(submission.contact_method, Some(ContactMethod::Phone));
        assert_eq!(submission.email, "");
        assert_eq!(submission.phone, "206-555-0123");
        assert_eq!(submission.location.as_deref(), Some("Seward Park"));

        assert!(state.story().is_empty());
        assert_eq!(state.selected_prompt(), None);
        assert_eq!(state.residency(), Residency::Current);
        assert!(state.emotion_tags().is_empty());
        assert!(!state.is_anonymous());
    }

    #[test]
    fn payload_omits_contact_without_notifications() {
        let mut state = with_story();
        send(&mut state, Message::EmailChanged("hodan@example.com".into()));
        let Event::Submitted(submission) = send(&mut state, Message::Submit) else {
            panic!("expected a submission");
        };
        assert_eq!(submission.contact_method, None);
        assert_eq!(submission.email, "");
        assert_eq!(submission.current_location, None);
        assert_eq!(submission.location, None);
    }

    #[test]
    fn cancel_keeps_draft() {
        let mut state = with_story();
        assert_eq!(send(&mut state, Message::Cancel), Event::Cancelled);
        assert_eq!(state.story(), "Hope");
    }
}
