//! End-to-end builds against a temporary site directory.

use std::fs;

use postsearch::build::{build_from, run_build, PipelineOutput};
use postsearch::config::BuildConfig;

use crate::common::{fixed_now, pipeline_record, read_artifact, write_pipeline_output};

#[test]
fn test_build_writes_published_posts_in_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut draft = pipeline_record("draft", "Draft", "2024-01-01", "wip");
    draft["draft"] = true.into();
    let content = write_pipeline_output(
        dir.path(),
        &[
            pipeline_record("second", "Second", "2024-03-01", "# Hello\n\nWorld"),
            draft,
            pipeline_record("future", "Future", "2099-01-01", "later"),
            pipeline_record("first", "First", "2024-01-01T08:00:00Z", "Plain body"),
        ],
    );
    let artifact = dir.path().join("public/search-index.json");

    let report = build_from(&PipelineOutput::new(&content), &artifact, fixed_now()).unwrap();
    assert_eq!(report.entries, 2);
    assert_eq!(report.unpublished, 2);
    assert!(!report.degraded);

    let entries = read_artifact(&artifact);
    let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["second", "first"]);
    assert_eq!(entries[0].id, "second");
    assert_eq!(entries[0].content, "Hello World");
    assert_eq!(entries[0].description, "About Second");
}

#[test]
fn test_missing_content_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuildConfig::default()
        .with_content_path(dir.path().join("nope/posts.json"))
        .with_output_dir(dir.path().join("public"));

    let report = run_build(&config).unwrap();
    assert!(report.degraded);
    assert_eq!(report.entries, 0);
    assert_eq!(fs::read_to_string(config.artifact_path()).unwrap(), "[]");
}

#[test]
fn test_non_array_content_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("posts.json");
    fs::write(&content, r#"{"posts": []}"#).unwrap();
    let artifact = dir.path().join("search-index.json");

    let report = build_from(&PipelineOutput::new(&content), &artifact, fixed_now()).unwrap();
    assert!(report.degraded);
    assert!(read_artifact(&artifact).is_empty());
}

#[test]
fn test_artifact_is_pretty_printed_with_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let content = write_pipeline_output(
        dir.path(),
        &[pipeline_record("a", "A", "2024-01-01", "body")],
    );
    let artifact = dir.path().join("search-index.json");
    build_from(&PipelineOutput::new(&content), &artifact, fixed_now()).unwrap();

    let text = fs::read_to_string(&artifact).unwrap();
    assert!(text.starts_with("[\n  {\n    \"id\": \"a\""));
    assert!(text.contains("\"publishDate\": \"2024-01-01\""));
}

#[test]
fn test_build_overwrites_previous_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("search-index.json");
    fs::write(&artifact, "stale content that is much longer than an empty array").unwrap();

    let content = write_pipeline_output(dir.path(), &[]);
    let report = build_from(&PipelineOutput::new(&content), &artifact, fixed_now()).unwrap();
    assert_eq!(report.entries, 0);
    assert_eq!(fs::read_to_string(&artifact).unwrap(), "[]");
}

#[test]
fn test_malformed_records_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let content = write_pipeline_output(
        dir.path(),
        &[
            serde_json::json!({ "slugAsParams": "broken" }),
            pipeline_record("ok", "Ok", "2024-01-01", "fine"),
            pipeline_record("bad-date", "Bad", "someday", "fine"),
        ],
    );
    let artifact = dir.path().join("search-index.json");

    let report = build_from(&PipelineOutput::new(&content), &artifact, fixed_now()).unwrap();
    assert_eq!(report.entries, 1);
    assert_eq!(report.skipped, 2);
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A file where the output directory should be
    let blocker = dir.path().join("public");
    fs::write(&blocker, "not a directory").unwrap();
    let content = write_pipeline_output(dir.path(), &[]);

    let result = build_from(
        &PipelineOutput::new(&content),
        &blocker.join("search-index.json"),
        fixed_now(),
    );
    assert!(matches!(result, Err(postsearch::Error::ArtifactWrite { .. })));
}
