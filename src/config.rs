// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the builder reads from and writes to.
//!
//! The defaults match the site layout: the content pipeline writes
//! `.velite/posts.json`, the static host serves `public/`. The CLI can
//! override both, but a plain `postsearch` run needs no flags.

use std::path::{Path, PathBuf};

/// Default location of the content pipeline output.
pub const DEFAULT_CONTENT_PATH: &str = ".velite/posts.json";

/// Default static asset directory.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Artifact file name. The client fetches `/search-index.json`.
pub const ARTIFACT_NAME: &str = "search-index.json";

/// Route prefix for post pages.
pub const POST_ROUTE_PREFIX: &str = "/blog";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub content_path: PathBuf,
    pub output_dir: PathBuf,
    pub artifact_name: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            artifact_name: ARTIFACT_NAME.to_string(),
        }
    }
}

impl BuildConfig {
    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Full path of the artifact the build writes.
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(&self.artifact_name)
    }

    pub fn content_path(&self) -> &Path {
        &self.content_path
    }
}
