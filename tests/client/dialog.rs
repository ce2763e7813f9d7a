//! Driving the dialog the way the page does.

use postsearch::client::{DialogConfig, DialogState, KeyPress, SearchDialog};
use postsearch::Error;

use crate::common::rust_scenario;

fn artifact_bytes() -> Vec<u8> {
    serde_json::to_vec(&rust_scenario()).unwrap()
}

#[test]
fn test_full_session() {
    let mut dialog = SearchDialog::new(DialogConfig::default());

    // Before hydration the shortcut does nothing
    assert!(!dialog.key_down(&KeyPress::new("k").with_meta()));
    dialog.mount();

    // The reader is fast: opens and types before the index arrives
    assert!(dialog.key_down(&KeyPress::new("k").with_ctrl()));
    assert_eq!(dialog.state(), DialogState::Empty);
    dialog.input("r");
    dialog.input("ru");
    dialog.input("rust");
    assert_eq!(dialog.state(), DialogState::Loading);
    assert!(dialog.results().is_empty());

    dialog.index_loaded(Ok(artifact_bytes()));
    assert_eq!(dialog.state(), DialogState::Results);
    assert_eq!(dialog.results()[0].slug, "intro-to-rust");

    let nav = dialog.select(1).unwrap();
    assert_eq!(nav.path, "/blog/cooking");
    assert_eq!(dialog.state(), DialogState::Closed);

    // Reopening starts clean
    dialog.open();
    assert_eq!(dialog.query(), "");
    assert_eq!(dialog.state(), DialogState::Empty);
}

#[test]
fn test_index_arriving_while_closed() {
    let mut dialog = SearchDialog::default();
    dialog.index_loaded(Ok(artifact_bytes()));
    assert_eq!(dialog.state(), DialogState::Closed);
    dialog.open();
    dialog.input("cooking");
    assert_eq!(dialog.state(), DialogState::Results);
}

#[test]
fn test_failed_index_never_shows_results() {
    let mut dialog = SearchDialog::default();
    dialog.index_loaded(Err(Error::ArtifactFetch("500".into())));
    dialog.open();
    dialog.input("rust");
    assert_eq!(dialog.state(), DialogState::NoResults);
    // A late successful load can't rescue it
    dialog.index_loaded(Ok(artifact_bytes()));
    assert_eq!(dialog.state(), DialogState::NoResults);
}

#[test]
fn test_clear_then_type_again() {
    let mut dialog = SearchDialog::default();
    dialog.index_loaded(Ok(artifact_bytes()));
    dialog.open();
    dialog.input("food");
    assert_eq!(dialog.state(), DialogState::Results);
    dialog.clear();
    assert_eq!(dialog.state(), DialogState::Empty);
    assert!(dialog.is_open());
    dialog.input("qwertyuiop");
    assert_eq!(dialog.state(), DialogState::NoResults);
}

#[test]
fn test_dismiss_keeps_nothing_visible() {
    let mut dialog = SearchDialog::default();
    dialog.mount();
    dialog.open();
    dialog.dismiss();
    assert_eq!(dialog.state(), DialogState::Closed);
    assert!(dialog.select(0).is_none());
}
