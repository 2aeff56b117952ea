//! Integration tests for the SQLite template store.

use common::model::block::{Block, BlockBody, HeaderProps, TextProps};
use common::render::render_document;

use backend::error::StoreError;
use backend::store::TemplateStore;

fn sample_blocks() -> Vec<Block> {
    vec![
        Block {
            id: "header-1".to_string(),
            body: BlockBody::Header(HeaderProps {
                text: "Welcome".to_string(),
                ..Default::default()
            }),
            rich_text: None,
        },
        Block {
            id: "text-2".to_string(),
            body: BlockBody::Text(TextProps::default()),
            rich_text: Some("<p>Hello <b>there</b></p>".to_string()),
        },
    ]
}

fn open_store(dir: &tempfile::TempDir) -> TemplateStore {
    TemplateStore::open(dir.path().join("templates.sqlite")).unwrap()
}

#[test]
fn saved_template_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let blocks = sample_blocks();
    let json = serde_json::to_string(&blocks).unwrap();
    let html = render_document(&blocks).unwrap();

    store.save("newsletter", &html, &json, false).unwrap();

    let record = store.load("newsletter").unwrap();
    assert_eq!(record.name, "newsletter");
    assert_eq!(record.html, html);

    let reloaded: Vec<Block> = serde_json::from_str(&record.json).unwrap();
    assert_eq!(reloaded, blocks);
}

#[test]
fn duplicate_name_without_overwrite_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let json = serde_json::to_string(&sample_blocks()).unwrap();
    store.save("promo", "<html></html>", &json, false).unwrap();

    let err = store.save("promo", "<html></html>", &json, false).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(name) if name == "promo"));
}

#[test]
fn overwrite_replaces_the_stored_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let first = serde_json::to_string(&sample_blocks()).unwrap();
    store.save("promo", "<html>v1</html>", &first, false).unwrap();

    let mut updated = sample_blocks();
    updated[0].body = BlockBody::Header(HeaderProps {
        text: "Updated".to_string(),
        ..Default::default()
    });
    let second = serde_json::to_string(&updated).unwrap();
    store.save("promo", "<html>v2</html>", &second, true).unwrap();

    let record = store.load("promo").unwrap();
    assert_eq!(record.html, "<html>v2</html>");
    let reloaded: Vec<Block> = serde_json::from_str(&record.json).unwrap();
    assert_eq!(reloaded, updated);

    // Still a single row under that name.
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn loading_a_missing_template_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let err = store.load("nope").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(name) if name == "nope"));
}

#[test]
fn empty_and_whitespace_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let json = serde_json::to_string(&sample_blocks()).unwrap();
    assert!(matches!(
        store.save("", "<html></html>", &json, false),
        Err(StoreError::EmptyName)
    ));
    assert!(matches!(
        store.save("   ", "<html></html>", &json, false),
        Err(StoreError::EmptyName)
    ));
}

#[test]
fn names_that_break_template_urls_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let json = serde_json::to_string(&sample_blocks()).unwrap();
    // A stored name like "q/a" could never be reopened through
    // /api/templates/{name}, so the save itself must fail.
    for name in ["q/a", "back\\slash", "what?", "frag#ment", "100%"] {
        let err = store.save(name, "<html></html>", &json, false).unwrap_err();
        assert!(
            matches!(err, StoreError::InvalidName(_)),
            "{name} must be rejected"
        );
    }
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn malformed_json_artifact_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let err = store
        .save("broken", "<html></html>", "{not json", false)
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidArtifact(_)));
    assert!(matches!(store.load("broken"), Err(StoreError::NotFound(_))));
}

#[test]
fn names_are_trimmed_before_storage_and_conflict_checks() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let json = serde_json::to_string(&sample_blocks()).unwrap();
    store.save("  padded  ", "<html></html>", &json, false).unwrap();

    assert!(store.load("padded").is_ok());
    let err = store.save("padded", "<html></html>", &json, false).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(_)));
}

#[test]
fn list_returns_every_saved_template() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let json = serde_json::to_string(&sample_blocks()).unwrap();
    store.save("a", "<html></html>", &json, false).unwrap();
    store.save("b", "<html></html>", &json, false).unwrap();

    let summaries = store.list().unwrap();
    let mut names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b"]);
    assert!(summaries.iter().all(|s| s.updated_at > 0));
}
