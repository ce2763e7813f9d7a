// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading posts from the content pipeline.
//!
//! The pipeline runs before us and leaves a JSON array of post records on
//! disk. We don't validate its schema beyond what deserialization needs. A
//! record that doesn't deserialize is dropped with a warning; a file that
//! doesn't exist or isn't an array means the whole content set is unavailable.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::SourceDocument;

/// Anything that can hand the builder a set of posts.
pub trait ContentSource {
    /// Load every post, drafts included. Filtering happens later.
    fn load(&self) -> Result<LoadedContent>;

    /// Human-readable location, for log lines.
    fn describe(&self) -> String;
}

/// Posts that loaded, plus the count of records we had to skip.
#[derive(Debug, Default, Clone)]
pub struct LoadedContent {
    pub documents: Vec<SourceDocument>,
    pub skipped: usize,
}

/// The JSON file the content pipeline writes (`.velite/posts.json`).
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    path: PathBuf,
}

impl PipelineOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PipelineOutput { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl ToString) -> Error {
        Error::ContentUnavailable {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ContentSource for PipelineOutput {
    fn load(&self) -> Result<LoadedContent> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| self.unavailable(e))?;
        let Value::Array(records) = value else {
            return Err(self.unavailable("expected a JSON array of posts"));
        };
        Ok(parse_records(records))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Posts already in memory. Mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    pub documents: Vec<SourceDocument>,
}

impl ContentSource for InMemoryContent {
    fn load(&self) -> Result<LoadedContent> {
        Ok(LoadedContent {
            documents: self.documents.clone(),
            skipped: 0,
        })
    }

    fn describe(&self) -> String {
        format!("{} in-memory posts", self.documents.len())
    }
}

/// Deserialize records one at a time so one bad post doesn't sink the rest.
pub fn parse_records(records: Vec<Value>) -> LoadedContent {
    let mut loaded = LoadedContent::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<SourceDocument>(record) {
            Ok(doc) => loaded.documents.push(doc),
            Err(e) => {
                let err = Error::MalformedEntry {
                    index,
                    reason: e.to_string(),
                };
                warn!(error = %err, "skipping post");
                loaded.skipped += 1;
            }
        }
    }
    loaded
}
