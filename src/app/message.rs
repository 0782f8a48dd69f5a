// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::domain::submission::SpaceSuggestion;
use crate::error::Error;
use crate::ui::notifications;
use crate::ui::{feed, interest, share_story, suggest_space};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Message),
    ShareStory(share_story::Message),
    SuggestSpace(suggest_space::Message),
    /// Routed to the interest form of the story whose dialog is open.
    Interest(interest::Message),
    SuggestionFinished(Result<SpaceSuggestion, Error>),
    /// Backdrop click.
    CloseDialog,
    Notification(notifications::NotificationMessage),
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 format (e.g., "so", "es-MX").
    pub lang: Option<String>,
    /// Community location slug (e.g., "seward-park").
    pub location: Option<String>,
}
