//! Result ordering and the result cap.

use postsearch::search::{search, SearchOptions};
use postsearch::InvertedIndex;

use crate::common::{make_entries_mentioning, make_entry, rust_scenario};

#[test]
fn test_rust_scenario() {
    let index = InvertedIndex::build(rust_scenario());
    let hits = search(Some(&index), "rust", &SearchOptions::default());
    let slugs: Vec<_> = hits.iter().map(|h| h.slug.as_str()).collect();
    assert_eq!(slugs, vec!["intro-to-rust", "cooking"]);
    assert!(hits[0].score > hits[1].score);
    assert_eq!(hits[0].path(), "/blog/intro-to-rust");
}

#[test]
fn test_title_match_beats_content_match() {
    let index = InvertedIndex::build(vec![
        make_entry("content", "Notes", "some words about lifetimes here"),
        make_entry("title", "Lifetimes", "some words about other things"),
    ]);
    let hits = search(Some(&index), "lifetimes", &SearchOptions::default());
    assert_eq!(hits[0].slug, "title");
    assert_eq!(hits[1].slug, "content");
}

#[test]
fn test_description_beats_content() {
    let mut described = make_entry("described", "One", "unrelated words");
    described.description = "all about borrowing".to_string();
    let index = InvertedIndex::build(vec![
        make_entry("body", "Two", "all about borrowing"),
        described,
    ]);
    let hits = search(Some(&index), "borrowing", &SearchOptions::default());
    assert_eq!(hits[0].slug, "described");
}

#[test]
fn test_at_most_ten_results_sorted_by_score() {
    let mut entries = make_entries_mentioning("tokio", 15);
    // Give a few of them stronger matches
    entries[12].title = "Tokio deep dive".to_string();
    entries[3].tags = vec!["tokio".to_string()];

    let index = InvertedIndex::build(entries);
    let hits = search(Some(&index), "tokio", &SearchOptions::default());
    assert_eq!(hits.len(), 10);
    assert_eq!(hits[0].slug, "post-12");
    assert_eq!(hits[1].slug, "post-3");
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_equal_scores_keep_artifact_order() {
    let index = InvertedIndex::build(make_entries_mentioning("serde", 4));
    let hits = search(Some(&index), "serde", &SearchOptions::default());
    let slugs: Vec<_> = hits.iter().map(|h| h.slug.as_str()).collect();
    assert_eq!(slugs, vec!["post-0", "post-1", "post-2", "post-3"]);
}

#[test]
fn test_custom_limit() {
    let index = InvertedIndex::build(make_entries_mentioning("serde", 4));
    let options = SearchOptions {
        limit: 2,
        ..SearchOptions::default()
    };
    assert_eq!(search(Some(&index), "serde", &options).len(), 2);
}

#[test]
fn test_repeated_queries_are_identical() {
    let index = InvertedIndex::build(rust_scenario());
    let first = search(Some(&index), "rust sys", &SearchOptions::default());
    let second = search(Some(&index), "rust sys", &SearchOptions::default());
    assert_eq!(first, second);
}
