// SPDX-License-Identifier: MPL-2.0
//! A story in the feed, with its own interest counter and interest form.

use crate::domain::story::{Story, StoryId};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::interest;
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    story: Story,
    interested: u32,
    interest: interest::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    HearMore,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub meetup_threshold: u32,
}

impl State {
    #[must_use]
    pub fn new(story: Story) -> Self {
        Self {
            interested: story.interested,
            story,
            interest: interest::State::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StoryId {
        self.story.id
    }

    #[must_use]
    pub fn story(&self) -> &Story {
        &self.story
    }

    #[must_use]
    pub fn interested(&self) -> u32 {
        self.interested
    }

    #[must_use]
    pub fn interest(&self) -> &interest::State {
        &self.interest
    }

    /// Forwards a message to this card's interest form.
    pub fn update_interest(&mut self, message: interest::Message) -> interest::Event {
        let event = self.interest.update(message, &self.story);
        if matches!(event, interest::Event::Submitted(_)) {
            self.interested = self.interested.saturating_add(1);
        }
        event
    }

    #[must_use]
    pub fn reached_threshold(&self, threshold: u32) -> bool {
        self.interested >= threshold
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let story = &self.story;

        let tags = story.tags.iter().fold(Row::new().spacing(spacing::XXS), |row, tag| {
            row.push(pill(tag.clone(), palette::PRIMARY_100, palette::PRIMARY_700))
        });

        let mut body = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(story.title.as_str()).size(typography::TITLE_SM))
            .push(Text::new(story.excerpt.as_str()).size(typography::BODY))
            .push(tags.wrap());

        if !story.emotion_tags.is_empty() {
            let emotions = story
                .emotion_tags
                .iter()
                .fold(Row::new().spacing(spacing::XXS), |row, key| {
                    row.push(pill(i18n.tr(key), palette::ROSE_100, palette::ROSE_800))
                });
            body = body.push(emotions.wrap());
        }

        body = body
            .push(
                Text::new(i18n.tr_with_args("byAuthor", &[("author", story.author.as_str())]))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .push(
                button(Text::new(format!("☕ {}", i18n.tr("iWantToHearMore"))).size(typography::BODY_SM))
                    .on_press(Message::HearMore)
                    .style(styles::button::unselected),
            );

        if self.reached_threshold(ctx.meetup_threshold) {
            body = body.push(
                container(Text::new(i18n.tr("meetupThresholdReached")).size(typography::CAPTION))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::container::tinted(palette::PRIMARY_100, palette::PRIMARY_700)),
            );
        }

        container(body)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card)
            .into()
    }
}

fn pill<'a>(label: String, background: Color, text: Color) -> Element<'a, Message> {
    container(Text::new(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::tag(background, text))
        .into()
}
