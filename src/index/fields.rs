// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed set of indexed fields and how to read each one.
//!
//! Five fields, each with its own accessor. Tags are a list in the artifact
//! but a single space-joined string to the index, so "machine learning" as a
//! tag is searchable by either word.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::types::IndexEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    Content,
    /// Tags joined with single spaces.
    TagsText,
    Category,
}

impl Field {
    /// Every indexed field, in slot order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Content,
        Field::TagsText,
        Field::Category,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in per-field arrays.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Field::Title => 0,
            Field::Description => 1,
            Field::Content => 2,
            Field::TagsText => 3,
            Field::Category => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Content => "content",
            Field::TagsText => "tagsText",
            Field::Category => "category",
        }
    }

    /// The text this field contributes to the index for `entry`.
    pub fn text(self, entry: &IndexEntry) -> Cow<'_, str> {
        match self {
            Field::Title => Cow::Borrowed(&entry.title),
            Field::Description => Cow::Borrowed(&entry.description),
            Field::Content => Cow::Borrowed(&entry.content),
            Field::TagsText => Cow::Owned(entry.tags.join(" ")),
            Field::Category => Cow::Borrowed(entry.category.as_deref().unwrap_or("")),
        }
    }
}

/// Per-field multipliers applied to every match in that field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldBoosts {
    pub title: f64,
    pub description: f64,
    pub tags_text: f64,
    pub content: f64,
    pub category: f64,
}

impl Default for FieldBoosts {
    /// Title 3, description 2, tags 1.5, everything else 1.
    fn default() -> Self {
        FieldBoosts {
            title: 3.0,
            description: 2.0,
            tags_text: 1.5,
            content: 1.0,
            category: 1.0,
        }
    }
}

impl FieldBoosts {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::TagsText => self.tags_text,
            Field::Content => self.content,
            Field::Category => self.category,
        }
    }
}
