// SPDX-License-Identifier: MPL-2.0
use proptest::prelude::*;
use std::fs;
use story_circle::app::{App, Dialog, Flags, Message};
use story_circle::config::{self, Config};
use story_circle::i18n::{interpolate, Catalog, I18n, Language};
use story_circle::ui::{feed, story_card};
use tempfile::tempdir;

fn i18n(language: Language) -> I18n {
    I18n::with_catalog(Catalog::shared(), language)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"so-SO\"\n").expect("Failed to write config");
    let somali = config::load_from_path(&path).expect("Failed to load Somali config");
    assert_eq!(I18n::new(None, &somali).current_language(), Language::Somali);

    fs::write(&path, "[general]\nlanguage = \"es\"\n").expect("Failed to write config");
    let spanish = config::load_from_path(&path).expect("Failed to load Spanish config");
    assert_eq!(I18n::new(None, &spanish).current_language(), Language::Spanish);

    // The command line wins over the file.
    assert_eq!(
        I18n::new(Some("en".into()), &spanish).current_language(),
        Language::English
    );
}

#[test]
fn test_community_settings_from_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[community]\nmeetup_threshold = 5\nsubmission_delay_ms = 10\ndefault_location = \"seward-park\"\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.meetup_threshold(), 5);
    assert_eq!(loaded.submission_delay().as_millis(), 10);

    let app = App::from_config(Flags::default(), &loaded, warning);
    assert_eq!(app.feed().location().map(|l| l.name), Some("Seward Park"));
    assert_eq!(app.feed().visible_ids().first(), Some(&3));
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[community\nmeetup_threshold =")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING_KEY));

    let app = App::from_config(Flags::default(), &loaded, warning);
    assert_eq!(app.notifications().visible_count(), 1);
}

#[test]
fn test_filter_then_hear_more_flow() {
    let mut app = App::from_config(
        Flags {
            lang: Some("so".into()),
            location: None,
        },
        &Config::default(),
        None,
    );

    let _ = app.update(Message::Feed(feed::Message::FilterToggled(
        "Loneliness".into(),
    )));
    assert_eq!(app.feed().visible_ids(), vec![3]);

    let _ = app.update(Message::Feed(feed::Message::Card(
        3,
        story_card::Message::HearMore,
    )));
    assert_eq!(app.dialog(), Some(Dialog::Interest(3)));

    let _ = app.update(Message::CloseDialog);
    assert_eq!(app.dialog(), None);
    assert_eq!(app.feed().filters(), ["Loneliness".to_string()]);
}

#[test]
fn test_every_language_covers_the_english_keys() {
    let catalog = Catalog::shared();
    for coverage in catalog.coverage() {
        assert!(
            coverage.is_complete(),
            "{} is missing {:?}",
            coverage.language,
            coverage.missing
        );
    }
}

#[test]
fn test_placeholders_are_filled_in_each_language() {
    for language in Language::ALL {
        let text = i18n(language).tr_with_args("byAuthor", &[("author", "Amina H.")]);
        assert!(text.contains("Amina H."), "{language}: {text}");
        assert!(!text.contains("{author}"), "{language}: {text}");
    }
}

proptest! {
    #[test]
    fn unknown_keys_resolve_to_themselves(suffix in "[a-zA-Z0-9]{1,16}") {
        let key = format!("missingKey{suffix}");
        for language in Language::ALL {
            prop_assert_eq!(i18n(language).tr(&key), key.clone());
        }
    }

    #[test]
    fn resolution_is_idempotent(index in 0usize..3, key in "[a-zA-Z]{1,12}") {
        let translator = i18n(Language::ALL[index]);
        prop_assert_eq!(translator.tr(&key), translator.tr(&key));
    }

    #[test]
    fn switching_language_is_visible_on_next_lookup(from in 0usize..3, to in 0usize..3) {
        let mut translator = i18n(Language::ALL[from]);
        translator.set_language(Language::ALL[to]);
        prop_assert_eq!(translator.current_language(), Language::ALL[to]);
        prop_assert_eq!(
            translator.tr("windowTitle"),
            i18n(Language::ALL[to]).tr("windowTitle")
        );
    }

    #[test]
    fn templates_without_placeholders_are_untouched(
        template in "[^{}]{0,40}",
        value in "[a-z]{0,8}",
    ) {
        prop_assert_eq!(interpolate(&template, &[("name", Some(value.as_str()))]), template);
    }

    #[test]
    fn missing_value_interpolates_as_empty(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let template = format!("{prefix}{{author}}{suffix}");
        prop_assert_eq!(
            interpolate(&template, &[("author", None)]),
            format!("{prefix}{suffix}")
        );
    }
}
