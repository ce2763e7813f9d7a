// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search client: artifact in, ranked hits out.
//!
//! The artifact is fetched once per page. Until it arrives the client is
//! `Pending` and every search comes back empty; if it never arrives (network
//! error, bad JSON) the client is `Failed` and stays that way for the life of
//! the page. The index is built completely before it's swapped in, so a
//! search never sees a half-built index.

pub mod dialog;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::search::{search, SearchHit, SearchOptions};
use crate::types::SearchArtifact;

pub use dialog::*;

/// Somewhere the artifact bytes come from.
///
/// In the browser that's a `fetch` the page script performs; natively it's
/// usually a file.
pub trait ArtifactSource {
    fn fetch(&self) -> Result<Vec<u8>>;
}

/// An artifact on disk.
#[derive(Debug, Clone)]
pub struct FileArtifact {
    path: PathBuf,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileArtifact { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactSource for FileArtifact {
    fn fetch(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .map_err(|e| Error::ArtifactFetch(format!("{}: {}", self.path.display(), e)))
    }
}

/// Where the one-shot load stands.
#[derive(Debug, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready(InvertedIndex),
    Failed,
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoadStatus::Pending => "pending",
            LoadStatus::Ready(_) => "ready",
            LoadStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchClient {
    status: LoadStatus,
    options: SearchOptions,
}

impl SearchClient {
    pub fn new(options: SearchOptions) -> Self {
        SearchClient {
            status: LoadStatus::Pending,
            options,
        }
    }

    /// Parse an artifact and build its index in one go.
    pub fn from_artifact_bytes(bytes: &[u8], options: SearchOptions) -> Result<Self> {
        let index = parse_artifact(bytes)?;
        Ok(SearchClient {
            status: LoadStatus::Ready(index),
            options,
        })
    }

    /// Hand the client the outcome of the artifact fetch.
    ///
    /// Only the first call counts. Returns whether this call changed anything.
    pub fn complete_load(&mut self, fetched: Result<Vec<u8>>) -> bool {
        if !self.status.is_pending() {
            debug!(status = self.status.name(), "search index already loaded, ignoring");
            return false;
        }

        self.status = match fetched.and_then(|bytes| parse_artifact(&bytes)) {
            Ok(index) => {
                info!(
                    docs = index.doc_count(),
                    terms = index.term_count(),
                    "search index ready"
                );
                LoadStatus::Ready(index)
            }
            Err(e) => {
                error!(error = %e, "failed to load search index");
                LoadStatus::Failed
            }
        };
        true
    }

    /// Fetch from `source` and complete the load with whatever comes back.
    pub fn load_from(&mut self, source: &impl ArtifactSource) -> bool {
        if !self.status.is_pending() {
            return false;
        }
        self.complete_load(source.fetch())
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_pending()
    }

    pub fn index(&self) -> Option<&InvertedIndex> {
        match &self.status {
            LoadStatus::Ready(index) => Some(index),
            _ => None,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Ranked hits; empty while pending, after a failed load, or for a
    /// blank query.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        search(self.index(), query, &self.options)
    }
}

/// Deserialize artifact bytes and index them.
pub fn parse_artifact(bytes: &[u8]) -> Result<InvertedIndex> {
    let entries: SearchArtifact = serde_json::from_slice(bytes)?;
    Ok(InvertedIndex::build(entries))
}
