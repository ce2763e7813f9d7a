// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the system.
//!
//! `SourceDocument` is what the content pipeline hands us. `IndexEntry` is
//! what we write to the artifact and what the browser reads back. Everything
//! in between is derived.
//!
//! # Invariants
//!
//! - **IndexEntry**: `id == slug`, and `content` is plain text of at most
//!   [`MAX_CONTENT_CHARS`] characters.
//! - **SearchArtifact**: entries appear in content-source order. The client
//!   uses that order as the final ranking tiebreaker.

use serde::{Deserialize, Serialize};

/// Hard cap on extracted content, in characters.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// A post as emitted by the content pipeline.
///
/// The pipeline emits more than this (compiled MDX body, computed paths,
/// reading time). We only pick what search needs and ignore the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    /// URL slug without the collection prefix (`posts/foo` becomes `foo`).
    #[serde(rename = "slugAsParams")]
    pub slug: String,
    pub title: String,
    pub description: String,
    /// ISO date (`2024-03-01`) or date-time (`2024-03-01T00:00:00.000Z`).
    pub publish_date: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    /// Unprocessed MDX source of the post body.
    pub raw: String,
}

/// One searchable record in the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub publish_date: String,
    /// Plain text extracted from the post body.
    #[serde(default)]
    pub content: String,
}

impl IndexEntry {
    /// Denormalize a source document, attaching already-extracted content.
    pub fn from_source(doc: &SourceDocument, content: String) -> Self {
        IndexEntry {
            id: doc.slug.clone(),
            slug: doc.slug.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            tags: doc.tags.clone(),
            category: non_empty(&doc.category),
            series: non_empty(&doc.series),
            publish_date: doc.publish_date.clone(),
            content,
        }
    }
}

/// An empty category or series is written as `null`, not `""`.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// The serialized build output: entries in content-source order.
pub type SearchArtifact = Vec<IndexEntry>;
