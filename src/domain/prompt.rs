// SPDX-License-Identifier: MPL-2.0
//! Writing aids offered by the share-story dialog.

use super::location::LocationPrompts;

/// Translation keys for a prompt's title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptKeys {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

impl PromptKeys {
    #[must_use]
    pub const fn new(title_key: &'static str, description_key: &'static str) -> Self {
        Self {
            title_key,
            description_key,
        }
    }
}

/// Icon shown next to a prompt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptIcon {
    Memory,
    Food,
    Dream,
    Place,
}

impl PromptIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            PromptIcon::Memory => "📖",
            PromptIcon::Food => "🍲",
            PromptIcon::Dream => "⭐",
            PromptIcon::Place => "📍",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryPrompt {
    pub icon: PromptIcon,
    pub keys: PromptKeys,
}

pub const DEFAULT_PROMPTS: [StoryPrompt; 3] = [
    StoryPrompt {
        icon: PromptIcon::Memory,
        keys: PromptKeys::new("rainierValleyMemoryTitle", "rainierValleyMemoryDescription"),
    },
    StoryPrompt {
        icon: PromptIcon::Food,
        keys: PromptKeys::new("neighborhoodFoodTitle", "neighborhoodFoodDescription"),
    },
    StoryPrompt {
        icon: PromptIcon::Dream,
        keys: PromptKeys::new("neighborhoodDreamTitle", "neighborhoodDreamDescription"),
    },
];

/// Prompts for the dialog: location prompts first, then the defaults.
#[must_use]
pub fn prompts_for(location: Option<&LocationPrompts>) -> Vec<StoryPrompt> {
    let local = location.into_iter().flat_map(|context| {
        context.prompts.iter().map(|keys| StoryPrompt {
            icon: PromptIcon::Place,
            keys: *keys,
        })
    });
    local.chain(DEFAULT_PROMPTS).collect()
}

pub const WORD_BANK: [&str; 16] = [
    "Light rail",
    "Property taxes",
    "Neighbors",
    "A passing Moment",
    "Grandmothers Garden",
    "Hope",
    "New Developers",
    "Gratitude",
    "Languages Lost",
    "Wildlife Sighting",
    "Rent Doubled",
    "Friendly Moment",
    "Then and Now",
    "Kubota Garden",
    "Seward Park",
    "Rainier Avenue",
];

/// Emotion translation keys offered as one-click tags.
pub const PREDEFINED_EMOTIONS: [&str; 6] = [
    "Loneliness",
    "Pride",
    "Resilience",
    "Joy",
    "Shock",
    "Gratitude",
];

/// Appends a word-bank word to the story, space-separated.
#[must_use]
pub fn append_word(story: &str, word: &str) -> String {
    if story.is_empty() {
        word.to_string()
    } else {
        format!("{story} {word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::location_prompts;

    #[test]
    fn defaults_only_without_location() {
        let prompts = prompts_for(None);
        assert_eq!(prompts, DEFAULT_PROMPTS.to_vec());
    }

    #[test]
    fn location_prompts_come_first() {
        let context = location_prompts("seward-park").expect("known slug");
        let prompts = prompts_for(Some(&context));
        assert_eq!(prompts.len(), 6);
        assert_eq!(prompts[0].icon, PromptIcon::Place);
        assert_eq!(prompts[0].keys.title_key, "locationMemoryTitle");
        assert_eq!(prompts[3], DEFAULT_PROMPTS[0]);
    }

    #[test]
    fn append_word_to_empty_story() {
        assert_eq!(append_word("", "Hope"), "Hope");
    }

    #[test]
    fn append_word_adds_single_space() {
        assert_eq!(append_word("I felt", "Hope"), "I felt Hope");
    }

    #[test]
    fn word_bank_has_no_duplicates() {
        let mut words = WORD_BANK.to_vec();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), WORD_BANK.len());
    }
}
