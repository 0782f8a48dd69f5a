// SPDX-License-Identifier: MPL-2.0
//! Contact details, residency and the payloads produced by the dialogs.
//!
//! Nothing here is sent anywhere: payloads are only logged.

/// Returns true when `value` has non-whitespace content.
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

impl ContactMethod {
    /// Translation key of the method's button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "text",
        }
    }
}

/// Email or phone, whichever the person picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub method: ContactMethod,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    /// The field that belongs to the selected method.
    #[must_use]
    pub fn selected_value(&self) -> &str {
        match self.method {
            ContactMethod::Email => &self.email,
            ContactMethod::Phone => &self.phone,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_filled(self.selected_value())
    }

    /// Email for logging: the typed value when email is selected, else empty.
    #[must_use]
    pub fn email_or_empty(&self) -> String {
        match self.method {
            ContactMethod::Email => self.email.clone(),
            ContactMethod::Phone => String::new(),
        }
    }

    #[must_use]
    pub fn phone_or_empty(&self) -> String {
        match self.method {
            ContactMethod::Phone => self.phone.clone(),
            ContactMethod::Email => String::new(),
        }
    }

    /// Clears both fields, keeping the chosen method.
    pub fn clear(&mut self) {
        self.email.clear();
        self.phone.clear();
    }
}

/// Whether the storyteller lives in the neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Residency {
    #[default]
    Current,
    Former,
    Visitor,
}

impl Residency {
    pub const ALL: [Residency; 3] = [Residency::Current, Residency::Former, Residency::Visitor];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Residency::Current => "residencyCurrent",
            Residency::Former => "residencyFormer",
            Residency::Visitor => "residencyVisitor",
        }
    }

    /// Former residents and visitors are asked where they live now.
    #[must_use]
    pub fn asks_for_location(self) -> bool {
        self != Residency::Current
    }
}

/// An emotion attached to a new story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionTag {
    /// Translation key from [`crate::domain::prompt::PREDEFINED_EMOTIONS`].
    Predefined(&'static str),
    /// Free text typed by the storyteller.
    Custom(String),
}

/// Payload logged when someone asks to hear more of a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestSubmission {
    pub story_title: String,
    pub story_author: String,
    pub contact_method: ContactMethod,
    pub email: String,
    pub phone: String,
    pub name: String,
}

/// Payload logged when a story is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySubmission {
    pub selected_prompt: Option<usize>,
    pub story: String,
    pub author_name: String,
    pub is_anonymous: bool,
    pub wants_meetup_notifications: bool,
    pub residency: Residency,
    /// Only set for former residents and visitors.
    pub current_location: Option<String>,
    pub emotion_tags: Vec<EmotionTag>,
    /// Only set when meetup notifications are wanted.
    pub contact_method: Option<ContactMethod>,
    pub email: String,
    pub phone: String,
    /// Name of the location the app was opened for, if any.
    pub location: Option<String>,
}

/// Payload logged when someone suggests a new gathering space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceSuggestion {
    pub suggestion: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_not_filled() {
        assert!(!is_filled(""));
        assert!(!is_filled("  \t"));
        assert!(is_filled(" a "));
    }

    #[test]
    fn contact_completeness_follows_selected_method() {
        let mut contact = ContactDetails {
            method: ContactMethod::Email,
            email: String::new(),
            phone: "555-0100".into(),
        };
        assert!(!contact.is_complete());

        contact.method = ContactMethod::Phone;
        assert!(contact.is_complete());
        assert_eq!(contact.email_or_empty(), "");
        assert_eq!(contact.phone_or_empty(), "555-0100");
    }

    #[test]
    fn clear_keeps_method() {
        let mut contact = ContactDetails {
            method: ContactMethod::Phone,
            email: "a@b.c".into(),
            phone: "1".into(),
        };
        contact.clear();
        assert_eq!(contact.method, ContactMethod::Phone);
        assert!(contact.email.is_empty());
        assert!(contact.phone.is_empty());
    }

    #[test]
    fn only_current_residents_skip_location() {
        assert!(!Residency::Current.asks_for_location());
        assert!(Residency::Former.asks_for_location());
        assert!(Residency::Visitor.asks_for_location());
    }
}
