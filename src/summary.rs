// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What's in an artifact, at a glance.
//!
//! The taxonomy lists are the same ones the site renders on its tag, category
//! and series pages: unique values across published posts, sorted. Since the
//! artifact only holds published posts, it's a convenient place to check them.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::IndexEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSummary {
    pub entries: usize,
    /// Total extracted content, in characters.
    pub content_chars: usize,
    /// Entries whose content hit the extraction cap.
    pub truncated: usize,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub series: Vec<String>,
}

impl ArtifactSummary {
    pub fn from_entries(entries: &[IndexEntry], content_cap: usize) -> Self {
        let mut tags = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut series = BTreeSet::new();
        let mut content_chars = 0;
        let mut truncated = 0;

        for entry in entries {
            tags.extend(entry.tags.iter().cloned());
            categories.extend(entry.category.iter().filter(|c| !c.is_empty()).cloned());
            series.extend(entry.series.iter().filter(|s| !s.is_empty()).cloned());

            let chars = entry.content.chars().count();
            content_chars += chars;
            if chars >= content_cap {
                truncated += 1;
            }
        }

        ArtifactSummary {
            entries: entries.len(),
            content_chars,
            truncated,
            tags: tags.into_iter().collect(),
            categories: categories.into_iter().collect(),
            series: series.into_iter().collect(),
        }
    }
}
