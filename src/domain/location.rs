// SPDX-License-Identifier: MPL-2.0
//! Community gathering places.

use super::prompt::PromptKeys;

/// What kind of place a community location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    YouthCenter,
    Park,
    CoffeeShop,
}

impl LocationKind {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            LocationKind::YouthCenter => "Fosters leadership and healing for youth.",
            LocationKind::Park => {
                "Not just a green space, it's a site for picnics, soccer games, multiracial \
                 events/gatherings/celebrations, martial arts lessons, and outdoor prayer circles."
            }
            LocationKind::CoffeeShop => "A local coffee shop.",
        }
    }
}

/// A place where story circles can meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityLocation {
    pub name: &'static str,
    pub slug: &'static str,
    pub kind: LocationKind,
}

impl CommunityLocation {
    const fn new(name: &'static str, slug: &'static str, kind: LocationKind) -> Self {
        Self { name, slug, kind }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

pub const COMMUNITY_LOCATIONS: [CommunityLocation; 11] = [
    CommunityLocation::new("Urban Family", "urban-family", LocationKind::YouthCenter),
    CommunityLocation::new(
        "El Centro de la Raza",
        "el-centro-de-la-raza",
        LocationKind::YouthCenter,
    ),
    CommunityLocation::new(
        "SouthEast Youth & Family Services",
        "southeast-youth-family-services",
        LocationKind::YouthCenter,
    ),
    CommunityLocation::new(
        "RYBO (Rainier Beach: A Beautiful Safe Place for Youth)",
        "rybo",
        LocationKind::YouthCenter,
    ),
    CommunityLocation::new("Seward Park", "seward-park", LocationKind::Park),
    CommunityLocation::new("Jefferson Park", "jefferson-park", LocationKind::Park),
    CommunityLocation::new("Othello Playground", "othello-playground", LocationKind::Park),
    CommunityLocation::new("Kubota Garden", "kubota-garden", LocationKind::Park),
    CommunityLocation::new(
        "The Station Columbia City",
        "the-station-columbia-city",
        LocationKind::CoffeeShop,
    ),
    CommunityLocation::new(
        "Empire Roasters & Records",
        "empire-roasters-records",
        LocationKind::CoffeeShop,
    ),
    CommunityLocation::new(
        "Olympia Coffee Roasting",
        "olympia-coffee-roasting",
        LocationKind::CoffeeShop,
    ),
];

#[must_use]
pub fn find_location(slug: &str) -> Option<&'static CommunityLocation> {
    COMMUNITY_LOCATIONS.iter().find(|location| location.slug == slug)
}

/// Location context the app was opened with: the place's name and any
/// prompts written for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPrompts {
    pub name: &'static str,
    pub prompts: Vec<PromptKeys>,
}

const SEWARD_PARK_PROMPTS: [PromptKeys; 3] = [
    PromptKeys::new("locationMemoryTitle", "locationMemoryDescription"),
    PromptKeys::new("someoneWhoLeftTitle", "someoneWhoLeftDescription"),
    PromptKeys::new("newcomersKnewTitle", "newcomersKnewDescription"),
];

/// Builds the location context for `slug`, or `None` for an unknown place.
///
/// Only Seward Park has prompts of its own so far; other places get the
/// banner and ordering without extra prompts.
#[must_use]
pub fn location_prompts(slug: &str) -> Option<LocationPrompts> {
    let location = find_location(slug)?;
    let prompts = match location.slug {
        "seward-park" => SEWARD_PARK_PROMPTS.to_vec(),
        _ => Vec::new(),
    };
    Some(LocationPrompts {
        name: location.name,
        prompts,
    })
}
