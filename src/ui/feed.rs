// SPDX-License-Identifier: MPL-2.0
//! The story feed page: header, location banner, emotion filter, story
//! cards, community stats and gathering places.

use crate::domain::location::{LocationPrompts, COMMUNITY_LOCATIONS};
use crate::domain::story::{distinct_emotion_tags, toggle_filter, visible_story_ids, Story, StoryId};
use crate::i18n::{I18n, Language};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::language_toggle;
use crate::ui::story_card;
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Length};

const NEIGHBORS_CONNECTED: u32 = 89;
const STORIES_SHARED: u32 = 67;
const COMMUNITY_MEETUPS: u32 = 18;

#[derive(Debug, Clone)]
pub struct State {
    cards: Vec<story_card::State>,
    filters: Vec<String>,
    filter_menu_open: bool,
    location: Option<LocationPrompts>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleFilterMenu,
    FilterToggled(String),
    ShareStory,
    SuggestSpace,
    LanguageSelected(Language),
    Card(StoryId, story_card::Message),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenShareStory,
    OpenSuggestSpace,
    OpenInterest(StoryId),
    LanguageSelected(Language),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub meetup_threshold: u32,
}

impl State {
    #[must_use]
    pub fn new(stories: Vec<Story>, location: Option<LocationPrompts>) -> Self {
        Self {
            cards: stories.into_iter().map(story_card::State::new).collect(),
            filters: Vec::new(),
            filter_menu_open: false,
            location,
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<&LocationPrompts> {
        self.location.as_ref()
    }

    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    #[must_use]
    pub fn is_filter_menu_open(&self) -> bool {
        self.filter_menu_open
    }

    /// Emotion tags offered by the filter menu.
    #[must_use]
    pub fn available_emotions(&self) -> Vec<String> {
        distinct_emotion_tags(self.cards.iter().map(story_card::State::story))
    }

    /// Story ids in display order, after location ordering and filtering.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<StoryId> {
        visible_story_ids(
            self.cards.iter().map(story_card::State::story),
            self.location.as_ref().map(|context| context.name),
            &self.filters,
        )
    }

    #[must_use]
    pub fn card(&self, id: StoryId) -> Option<&story_card::State> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn card_mut(&mut self, id: StoryId) -> Option<&mut story_card::State> {
        self.cards.iter_mut().find(|card| card.id() == id)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleFilterMenu => {
                self.filter_menu_open = !self.filter_menu_open;
                Event::None
            }
            Message::FilterToggled(tag) => {
                toggle_filter(&mut self.filters, &tag);
                Event::None
            }
            Message::ShareStory => Event::OpenShareStory,
            Message::SuggestSpace => Event::OpenSuggestSpace,
            Message::LanguageSelected(language) => Event::LanguageSelected(language),
            Message::Card(id, story_card::Message::HearMore) => Event::OpenInterest(id),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let mut page = Column::new().spacing(spacing::XL).padding(spacing::LG);

        if let Some(context) = &self.location {
            page = page.push(location_banner(i18n, context));
        }

        page = page
            .push(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(Horizontal::Center)
                    .width(Length::Fill)
                    .push(Text::new(i18n.tr("welcomeTitle")).size(typography::TITLE_LG))
                    .push(Text::new(i18n.tr("welcomeSubtitle")).size(typography::BODY_LG)),
            )
            .push(self.stories_section(&ctx))
            .push(stats(i18n))
            .push(call_to_action(i18n))
            .push(gathering_places(i18n))
            .push(
                Text::new(format!(
                    "{} {}",
                    i18n.tr("safeConnections"),
                    i18n.tr("safeConnectionsDetails")
                ))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
            );

        let body = container(page.max_width(sizing::CONTENT_MAX_WIDTH))
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        Column::new()
            .push(header(i18n))
            .push(scrollable(body).height(Length::Fill))
            .into()
    }

    fn stories_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let heading = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(format!("📖 {}", i18n.tr("storiesHeading")))
                    .size(typography::TITLE_MD)
                    .width(Length::Fill),
            )
            .push(
                container(Text::new(i18n.tr("location")).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::tag(palette::BLUE_100, palette::BLUE_700)),
            );

        let mut trigger_label = i18n.tr("filterByEmotion");
        if !self.filters.is_empty() {
            let count = self.filters.len().to_string();
            trigger_label.push(' ');
            trigger_label.push_str(&i18n.tr_with_args("filtersSelected", &[("count", count.as_str())]));
        }
        let arrow = if self.filter_menu_open { "▴" } else { "▾" };
        let trigger = button(
            Row::new()
                .push(Text::new(trigger_label).width(Length::Fill))
                .push(Text::new(arrow)),
        )
        .on_press(Message::ToggleFilterMenu)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::unselected);

        let mut section = Column::new().spacing(spacing::MD).push(heading).push(trigger);

        if self.filter_menu_open {
            let chips = self.available_emotions().into_iter().fold(
                Row::new().spacing(spacing::XS),
                |row, tag| {
                    let active = self.filters.contains(&tag);
                    row.push(
                        button(Text::new(i18n.tr(&tag)).size(typography::CAPTION))
                            .on_press(Message::FilterToggled(tag))
                            .padding([2.0, spacing::XS])
                            .style(styles::button::emotion_chip(active)),
                    )
                },
            );
            section = section.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(Text::new(i18n.tr("emotionTagsTitle")).size(typography::BODY_SM))
                        .push(chips.wrap()),
                )
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::card),
            );
        }

        let visible = self.visible_ids();
        if visible.is_empty() {
            return section
                .push(Text::new(i18n.tr("noStoriesMatch")).size(typography::BODY))
                .into();
        }

        let cards = visible
            .into_iter()
            .filter_map(|id| self.card(id))
            .fold(Column::new().spacing(spacing::MD), |column, card| {
                let id = card.id();
                column.push(
                    card.view(story_card::ViewContext {
                        i18n,
                        meetup_threshold: ctx.meetup_threshold,
                    })
                    .map(move |message| Message::Card(id, message)),
                )
            });

        section.push(cards).into()
    }
}

fn header<'a>(i18n: &I18n) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("headerTitle")).size(typography::TITLE_MD))
        .push(
            Text::new(format!("⛰ {}", i18n.tr("tagline")))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(titles)
        .push(language_toggle::view(i18n).map(Message::LanguageSelected))
        .push(
            button(Text::new(format!("+ {}", i18n.tr("shareYourStory"))))
                .on_press(Message::ShareStory)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    container(bar)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn location_banner<'a>(i18n: &I18n, context: &LocationPrompts) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(format!("📍 {} {}", i18n.tr("storiesFrom"), context.name))
                    .size(typography::TITLE_SM),
            )
            .push(Text::new(i18n.tr("locationBannerText")).size(typography::BODY_SM)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::tinted(palette::PRIMARY_100, palette::GRAY_900))
    .into()
}

fn stat_card<'a>(value: u32, label: String, detail: Option<String>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(value.to_string()).size(typography::DISPLAY))
        .push(Text::new(label).size(typography::BODY_SM));
    if let Some(detail) = detail {
        content = content.push(
            Text::new(detail)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    container(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::STAT_CARD_WIDTH))
        .align_x(Horizontal::Center)
        .style(styles::container::card)
        .into()
}

fn stats<'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .push(stat_card(
            NEIGHBORS_CONNECTED,
            i18n.tr("seattleNeighborsConnected"),
            None,
        ))
        .push(stat_card(STORIES_SHARED, i18n.tr("storiesShared"), None))
        .push(stat_card(
            COMMUNITY_MEETUPS,
            i18n.tr("communityMeetups"),
            Some(i18n.tr("meetupLocations")),
        ))
        .wrap()
        .into()
}

fn call_to_action<'a>(i18n: &I18n) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("readyToShareTitle")).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr("readyToShareSubtitle")).size(typography::BODY))
            .push(
                container(Text::new(format!("☕ {}", i18n.tr("shareAnonymously"))).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::tag(palette::PRIMARY_100, palette::PRIMARY_700)),
            )
            .push(
                button(Text::new(format!("+ {}", i18n.tr("shareYourStory"))))
                    .on_press(Message::ShareStory)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::tinted(palette::BLUE_100, palette::GRAY_900))
    .into()
}

fn gathering_places<'a>(i18n: &I18n) -> Element<'a, Message> {
    let places = COMMUNITY_LOCATIONS.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, location| {
            column.push(Text::new(format!("📍 {}", location.name)).size(typography::BODY_LG))
        },
    );

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("weGatherToListen")).size(typography::TITLE_MD))
        .push(places)
        .push(
            button(Text::new(i18n.tr("suggestSpaceTitle")))
                .on_press(Message::SuggestSpace)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::unselected),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::location_prompts;
    use crate::domain::story::sample_stories;

    fn feed() -> State {
        State::new(sample_stories(), None)
    }

    #[test]
    fn filter_menu_toggles() {
        let mut feed = feed();
        assert!(!feed.is_filter_menu_open());
        assert_eq!(feed.update(Message::ToggleFilterMenu), Event::None);
        assert!(feed.is_filter_menu_open());
    }

    #[test]
    fn filters_narrow_visible_stories() {
        let mut feed = feed();
        feed.update(Message::FilterToggled("Loneliness".into()));
        assert_eq!(feed.filters(), &["Loneliness".to_string()]);
        assert_eq!(feed.visible_ids(), vec![3]);

        feed.update(Message::FilterToggled("Loneliness".into()));
        assert_eq!(feed.visible_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn location_context_moves_local_stories_first() {
        let feed = State::new(sample_stories(), location_prompts("seward-park"));
        assert_eq!(feed.visible_ids(), vec![3, 1, 2, 4]);
        assert_eq!(feed.location().map(|c| c.name), Some("Seward Park"));
    }

    #[test]
    fn available_emotions_are_distinct() {
        assert_eq!(feed().available_emotions().len(), 5);
    }

    #[test]
    fn buttons_map_to_events() {
        let mut feed = feed();
        assert_eq!(feed.update(Message::ShareStory), Event::OpenShareStory);
        assert_eq!(feed.update(Message::SuggestSpace), Event::OpenSuggestSpace);
        assert_eq!(
            feed.update(Message::Card(2, story_card::Message::HearMore)),
            Event::OpenInterest(2)
        );
        assert_eq!(
            feed.update(Message::LanguageSelected(Language::Somali)),
            Event::LanguageSelected(Language::Somali)
        );
    }

    #[test]
    fn card_lookup_by_id() {
        let mut feed = feed();
        assert_eq!(feed.card(4).map(|c| c.story().author.as_str()), Some("Fatima A."));
        assert!(feed.card_mut(99).is_none());
    }
}
