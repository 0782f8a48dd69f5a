// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the feed and its dialogs.
//!
//! The `App` struct wires together the feed, the three dialogs, localization
//! and toast notifications, and turns dialog events into submissions.

mod message;
pub mod paths;
mod submission;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use submission::submit_space_suggestion;

use crate::config::{self, Config};
use crate::domain::location::{location_prompts, LocationPrompts};
use crate::domain::story::{sample_stories, StoryId};
use crate::i18n::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{feed, share_story, suggest_space};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// The dialog currently layered above the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ShareStory,
    SuggestSpace,
    Interest(StoryId),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    feed: feed::State,
    dialog: Option<Dialog>,
    share_story: share_story::State,
    suggest_space: suggest_space::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Resolved once at startup; system mode queries the OS.
    theme: Theme,
    meetup_threshold: u32,
    submission_delay: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.current_language())
            .field("dialog", &self.dialog)
            .field("location", &self.feed.location().map(|l| l.name))
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the location slug to its prompt context, logging unknown slugs.
fn resolve_location(slug: Option<&str>) -> Option<LocationPrompts> {
    let slug = slug?;
    let context = location_prompts(slug);
    if context.is_none() {
        tracing::warn!(slug, "unknown community location, showing the default feed");
    }
    context
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::from_config(flags, &config, config_warning), Task::none())
    }

    /// Builds the application from already-loaded settings.
    ///
    /// `config_warning` is the notification key reported by [`config::load`].
    pub fn from_config(flags: Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let slug = flags
            .location
            .or_else(|| config.community.default_location.clone());
        let location = resolve_location(slug.as_deref());

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let theme_mode = config.general.theme_mode;

        tracing::info!(
            language = %i18n.current_language(),
            location = location.as_ref().map(|l| l.name),
            "story circle started"
        );

        Self {
            i18n,
            feed: feed::State::new(sample_stories(), location),
            dialog: None,
            share_story: share_story::State::default(),
            suggest_space: suggest_space::State::default(),
            notifications,
            theme_mode,
            theme: theme_mode.theme(),
            meetup_threshold: config.meetup_threshold(),
            submission_delay: config.submission_delay(),
        }
    }

    #[must_use]
    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    #[must_use]
    pub fn feed(&self) -> &feed::State {
        &self.feed
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("windowTitle");
        match self.feed.location() {
            Some(location) => format!("{} - {app_name}", location.name),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            feed: &mut self.feed,
            dialog: &mut self.dialog,
            share_story: &mut self.share_story,
            suggest_space: &mut self.suggest_space,
            notifications: &mut self.notifications,
            submission_delay: self.submission_delay,
        };

        match message {
            Message::Feed(message) => update::handle_feed_message(&mut ctx, message),
            Message::ShareStory(message) => update::handle_share_story_message(&mut ctx, message),
            Message::SuggestSpace(message) => {
                update::handle_suggest_space_message(&mut ctx, message)
            }
            Message::Interest(message) => update::handle_interest_message(&mut ctx, message),
            Message::SuggestionFinished(result) => {
                update::handle_suggestion_finished(&mut ctx, result)
            }
            Message::CloseDialog => {
                self.dialog = None;
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            feed: &self.feed,
            dialog: self.dialog,
            share_story: &self.share_story,
            suggest_space: &self.suggest_space,
            notifications: &self.notifications,
            meetup_threshold: self.meetup_threshold,
        })
    }
}
