//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{IndexEntry, SourceDocument};

/// A published-looking post with an empty body.
pub fn make_source(slug: &str, title: &str, publish_date: &str) -> SourceDocument {
    SourceDocument {
        slug: slug.to_string(),
        title: title.to_string(),
        description: String::new(),
        publish_date: publish_date.to_string(),
        draft: false,
        tags: vec![],
        category: None,
        series: None,
        raw: String::new(),
    }
}

/// An artifact entry with only title and content filled in.
pub fn make_entry(slug: &str, title: &str, content: &str) -> IndexEntry {
    IndexEntry {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: vec![],
        category: None,
        series: None,
        publish_date: "2024-01-01".to_string(),
        content: content.to_string(),
    }
}

/// `count` entries that all mention `term` once in their content.
pub fn make_entries_mentioning(term: &str, count: usize) -> Vec<IndexEntry> {
    (0..count)
        .map(|i| make_entry(&format!("post-{i}"), &format!("Post {i}"), &format!("about {term}")))
        .collect()
}

/// A pipeline record as JSON, the way the content pipeline writes it.
pub fn pipeline_record(slug: &str, title: &str, publish_date: &str, raw: &str) -> serde_json::Value {
    serde_json::json!({
        "slug": format!("posts/{slug}"),
        "slugAsParams": slug,
        "title": title,
        "description": format!("About {title}"),
        "publishDate": publish_date,
        "draft": false,
        "tags": [],
        "raw": raw,
    })
}
