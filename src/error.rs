// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong, and who is expected to recover from it.
//!
//! Almost nothing here is fatal. The builder absorbs `ContentUnavailable` and
//! `MalformedEntry`, the client absorbs `ArtifactFetch` and `ArtifactParse`.
//! The one error that escapes to the caller is `ArtifactWrite`: if we can't
//! write the artifact, there is no degraded output to fall back to.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The content pipeline output could not be loaded at all.
    #[error("content unavailable at {}: {reason}", path.display())]
    ContentUnavailable { path: PathBuf, reason: String },

    /// A single post record is missing fields or carries values we can't read.
    #[error("malformed entry #{index}: {reason}")]
    MalformedEntry { index: usize, reason: String },

    /// The client could not retrieve the artifact.
    #[error("failed to fetch search artifact: {0}")]
    ArtifactFetch(String),

    /// The artifact was retrieved but is not a JSON array of entries.
    #[error("invalid search artifact: {0}")]
    ArtifactParse(#[from] serde_json::Error),

    /// Writing the artifact failed. The only error the build reports.
    #[error("failed to write {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
