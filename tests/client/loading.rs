//! Loading artifacts produced by the builder.

use std::fs;

use postsearch::build::{build_from, PipelineOutput};
use postsearch::client::{FileArtifact, LoadStatus, SearchClient};
use postsearch::search::SearchOptions;
use postsearch::Error;

use crate::common::{fixed_now, pipeline_record, write_pipeline_output};

#[test]
fn test_builder_output_round_trips_through_client() {
    let dir = tempfile::tempdir().unwrap();
    let content = write_pipeline_output(
        dir.path(),
        &[
            pipeline_record("ownership", "Ownership in Rust", "2024-01-01", "Borrowing rules"),
            pipeline_record("sourdough", "Sourdough", "2024-02-01", "Flour and water"),
        ],
    );
    let artifact = dir.path().join("public/search-index.json");
    build_from(&PipelineOutput::new(&content), &artifact, fixed_now()).unwrap();

    let mut client = SearchClient::new(SearchOptions::default());
    assert!(client.load_from(&FileArtifact::new(&artifact)));
    let hits = client.search("borrow");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path(), "/blog/ownership");
}

#[test]
fn test_degraded_build_loads_as_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("search-index.json");
    build_from(
        &PipelineOutput::new(dir.path().join("missing.json")),
        &artifact,
        fixed_now(),
    )
    .unwrap();

    let mut client = SearchClient::default();
    client.load_from(&FileArtifact::new(&artifact));
    assert!(matches!(client.status(), LoadStatus::Ready(_)));
    assert!(client.search("anything").is_empty());
}

#[test]
fn test_corrupt_artifact_fails_quietly() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("search-index.json");
    fs::write(&artifact, "<!doctype html>").unwrap();

    let mut client = SearchClient::default();
    client.load_from(&FileArtifact::new(&artifact));
    assert!(matches!(client.status(), LoadStatus::Failed));
    assert!(client.search("rust").is_empty());
}

#[test]
fn test_second_completion_is_ignored() {
    let mut client = SearchClient::default();
    assert!(client.complete_load(Ok(b"[]".to_vec())));
    assert!(!client.complete_load(Err(Error::ArtifactFetch("late".into()))));
    assert!(matches!(client.status(), LoadStatus::Ready(_)));
}

#[test]
fn test_from_artifact_bytes() {
    let bytes = br#"[{"id": "a", "slug": "a", "title": "Tokio tips"}]"#;
    let client = SearchClient::from_artifact_bytes(bytes, SearchOptions::default()).unwrap();
    assert_eq!(client.search("tokio")[0].slug, "a");
    assert!(SearchClient::from_artifact_bytes(b"nope", SearchOptions::default()).is_err());
}
