// SPDX-License-Identifier: MPL-2.0
//! Community stories and the rules for ordering and filtering the feed.

pub type StoryId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub neighborhood: String,
    pub tags: Vec<String>,
    /// Emotion translation keys (see [`crate::domain::prompt::PREDEFINED_EMOTIONS`]).
    pub emotion_tags: Vec<String>,
    pub likes: u32,
    pub responses: u32,
    pub interested: u32,
    pub has_photos: bool,
}

impl Story {
    #[must_use]
    pub fn has_any_emotion(&self, filters: &[String]) -> bool {
        self.emotion_tags.iter().any(|tag| filters.contains(tag))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

/// The stories bundled with the app.
#[must_use]
pub fn sample_stories() -> Vec<Story> {
    vec![
        Story {
            id: 1,
            title: "The Community Garden That Bridges Languages".into(),
            excerpt: "When I started the garden behind the Othello Light Rail station, neighbors \
                      from Somalia, Vietnam, and Mexico began sharing seeds and stories. Now we \
                      have a little UN of vegetables growing together..."
                .into(),
            author: "Amina H.".into(),
            neighborhood: "Othello".into(),
            tags: strings(&["Community", "Gardening", "Light Rail", "Languages"]),
            emotion_tags: strings(&["Joy", "Gratitude", "Resilience"]),
            likes: 24,
            responses: 8,
            interested: 2,
            has_photos: true,
        },
        Story {
            id: 2,
            title: "From Refugee to Restaurant Owner".into(),
            excerpt: "Arriving from Eritrea with nothing, I worked three jobs while learning \
                      English at South Seattle College. Now my restaurant on Rainier Avenue \
                      serves injera to neighbors who've become family..."
                .into(),
            author: "Tekle M.".into(),
            neighborhood: "Columbia City".into(),
            tags: strings(&["Immigration", "Business", "Food", "Community"]),
            emotion_tags: strings(&["Pride", "Resilience"]),
            likes: 31,
            responses: 12,
            interested: 5,
            has_photos: true,
        },
        Story {
            id: 3,
            title: "Finding Home in Seward Park".into(),
            excerpt: "After my divorce, walking the loop at Seward Park became my therapy. Then I \
                      met other solo walkers, and we formed an informal support group that meets \
                      every Saturday morning by the lake..."
                .into(),
            author: "Jennifer L.".into(),
            neighborhood: "Seward Park".into(),
            tags: strings(&["Mental Health", "Nature", "Support", "Walking"]),
            emotion_tags: strings(&["Loneliness", "Joy"]),
            likes: 18,
            responses: 6,
            interested: 1,
            has_photos: false,
        },
        Story {
            id: 4,
            title: "The Mosque That Opened Its Doors".into(),
            excerpt: "When our mosque started hosting interfaith dinners, I was nervous. But \
                      watching my Christian neighbor help serve halal food while my kids played \
                      with theirs, that's when I knew we were building something beautiful..."
                .into(),
            author: "Fatima A.".into(),
            neighborhood: "Rainier Beach".into(),
            tags: strings(&["Faith", "Community", "Interfaith", "Children"]),
            emotion_tags: strings(&["Gratitude", "Joy", "Pride"]),
            likes: 42,
            responses: 15,
            interested: 7,
            has_photos: true,
        },
    ]
}

/// Distinct emotion tags across all stories, in first-seen order.
#[must_use]
pub fn distinct_emotion_tags<'a>(stories: impl IntoIterator<Item = &'a Story>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tag in stories.into_iter().flat_map(|story| &story.emotion_tags) {
        if !seen.contains(tag) {
            seen.push(tag.clone());
        }
    }
    seen
}

/// Adds `tag` to the active filters, or removes it when already active.
pub fn toggle_filter(filters: &mut Vec<String>, tag: &str) {
    if let Some(index) = filters.iter().position(|active| active == tag) {
        filters.remove(index);
    } else {
        filters.push(tag.to_string());
    }
}

/// Ids of the stories to show, in display order.
///
/// Stories from `location_name` move to the front (stable), then active
/// filters keep only stories carrying at least one of the filter tags.
#[must_use]
pub fn visible_story_ids<'a>(
    stories: impl IntoIterator<Item = &'a Story>,
    location_name: Option<&str>,
    filters: &[String],
) -> Vec<StoryId> {
    let mut ordered: Vec<&Story> = stories.into_iter().collect();
    if let Some(name) = location_name {
        // sort_by_key is stable, so the relative order inside each group holds.
        ordered.sort_by_key(|story| story.neighborhood != name);
    }
    ordered
        .into_iter()
        .filter(|story| filters.is_empty() || story.has_any_emotion(filters))
        .map(|story| story.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(tags: &[&str]) -> Vec<String> {
        strings(tags)
    }

    #[test]
    fn sample_ids_are_sequential() {
        let ids: Vec<_> = sample_stories().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn distinct_tags_keep_first_seen_order() {
        let tags = distinct_emotion_tags(&sample_stories());
        assert_eq!(
            tags,
            filters(&["Joy", "Gratitude", "Resilience", "Pride", "Loneliness"])
        );
    }

    #[test]
    fn no_location_no_filters_keeps_original_order() {
        let ids = visible_story_ids(&sample_stories(), None, &[]);
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn location_stories_come_first() {
        let ids = visible_story_ids(&sample_stories(), Some("Seward Park"), &[]);
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn unmatched_location_keeps_order() {
        let ids = visible_story_ids(&sample_stories(), Some("Kubota Garden"), &[]);
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn filters_keep_stories_with_any_active_tag() {
        let ids = visible_story_ids(&sample_stories(), None, &filters(&["Loneliness", "Pride"]));
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn location_ordering_applies_before_filtering() {
        let ids = visible_story_ids(&sample_stories(), Some("Seward Park"), &filters(&["Joy"]));
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let ids = visible_story_ids(&sample_stories(), None, &filters(&["Shock"]));
        assert!(ids.is_empty());
    }

    #[test]
    fn toggle_filter_adds_then_removes() {
        let mut active = Vec::new();
        toggle_filter(&mut active, "Joy");
        toggle_filter(&mut active, "Pride");
        assert_eq!(active, filters(&["Joy", "Pride"]));
        toggle_filter(&mut active, "Joy");
        assert_eq!(active, filters(&["Pride"]));
    }
}
