// SPDX-License-Identifier: MPL-2.0
use cms_admin::app::config;
use cms_admin::content::{ContentId, ImageId, StoredImage};
use cms_admin::i18n::fluent::I18n;
use cms_admin::ui::content_form::{validate, ValidationError};
use cms_admin::ui::modal::{self, CloseReason};
use cms_admin::ui::staging::{PreviewSource, StagingList, MAX_IMAGES};
use cms_admin::ui::theming::ThemeMode;
use iced::widget::text_editor;
use std::path::PathBuf;
use tempfile::tempdir;

fn stored(id: i64) -> StoredImage {
    StoredImage {
        id: ImageId::from(id),
        filename: format!("photo-{id}.jpg"),
        url: format!("/uploads/photo-{id}.jpg"),
    }
}

#[test]
fn language_follows_the_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[general]\nlanguage = \"zh-CN\"\ntheme_mode = \"dark\"\n")
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");

    // The command line wins over the file
    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n.tr("list-new"), "New content");
}

#[test]
fn blank_fields_are_rejected_before_any_request() {
    assert_eq!(validate("   ", "body"), Err(ValidationError::EmptyTitle));
    assert_eq!(validate("title", "\n\t"), Err(ValidationError::EmptyBody));

    let draft = validate("  Title ", " Body\n").expect("valid draft");
    assert_eq!(draft.title, "Title");
    assert_eq!(draft.body, "Body");
}

#[test]
fn staging_never_exceeds_the_cap() {
    let mut list = StagingList::new();
    list.replace_with_stored((1..=4).map(stored).collect());

    let too_many = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
    let rejected = list.select(too_many).expect_err("selection should be refused");
    assert_eq!(rejected.current, 4);
    assert_eq!(rejected.selected, 2);
    assert_eq!(list.occupied(), 4);

    let (_, accepted) = list
        .select(vec![PathBuf::from("c.webp")])
        .expect("one more image fits");
    assert_eq!(accepted.len(), 1);
    assert_eq!(list.occupied(), MAX_IMAGES);
    assert_eq!(list.remaining(), 0);
}

#[test]
fn stored_images_render_from_their_server_path() {
    let mut list = StagingList::new();
    list.replace_with_stored(vec![stored(1), stored(2)]);

    let tiles = list.render();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].index, 0);
    assert!(tiles[1].saved);
    assert_eq!(
        list.entries()[1].source(),
        &PreviewSource::Remote("/uploads/photo-2.jpg".into())
    );
}

#[test]
fn every_close_trigger_resets_the_dialog() {
    for reason in [
        CloseReason::Button,
        CloseReason::OutsideClick,
        CloseReason::Escape,
    ] {
        let mut state = modal::State::new();
        let mut editor = text_editor::Content::new();
        let id = ContentId::from(11);
        state.begin_edit(id.clone());
        let content = serde_json::from_str(r#"{"id": 11, "title": "T", "content": "B"}"#)
            .expect("content json");
        assert!(state.finish_edit(&id, content, vec![stored(1)]));

        let event = modal::update(&mut state, &mut editor, modal::Message::Close(reason));

        assert!(matches!(event, modal::Event::Closed(r) if r == reason));
        assert!(!state.is_visible());
        assert_eq!(state.edit_target(), None);
        assert_eq!(state.title(), "");
        assert!(state.staging().is_empty());
    }
}
