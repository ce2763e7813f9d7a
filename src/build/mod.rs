// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The build step: posts in, `search-index.json` out.
//!
//! Four stages. Load posts from the content pipeline, drop drafts and
//! future-dated posts, extract plain text from each body, write the array.
//! Extraction is the only stage with real work in it, so that's the one that
//! goes through rayon.
//!
//! The build never fails because content is missing. A static site with an
//! empty search box is better than no static site, so a missing or broken
//! pipeline output gets logged and turned into `[]`. The only error this
//! module returns is failing to write the artifact itself.

pub mod content;
pub mod extract;
pub mod filter;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::types::{IndexEntry, SourceDocument};

pub use content::*;
pub use extract::extract_plain_text;
pub use filter::{is_published, parse_publish_date};

/// What a build did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries written to the artifact.
    pub entries: usize,
    /// Drafts and future-dated posts left out.
    pub unpublished: usize,
    /// Posts dropped because they were malformed.
    pub skipped: usize,
    pub artifact_path: PathBuf,
    pub bytes: usize,
    /// True when the content set was unavailable and `[]` was written instead.
    pub degraded: bool,
}

/// Eligible entries, in source order, plus bookkeeping.
#[derive(Debug, Default)]
pub struct BuiltEntries {
    pub entries: Vec<IndexEntry>,
    pub unpublished: usize,
    pub skipped: usize,
}

/// Build with the default content source for `config`.
pub fn run_build(config: &BuildConfig) -> Result<BuildReport> {
    let source = PipelineOutput::new(config.content_path());
    build_from(&source, &config.artifact_path(), Utc::now())
}

/// Build from any content source, with an explicit clock.
pub fn build_from(
    source: &dyn ContentSource,
    artifact_path: &Path,
    now: DateTime<Utc>,
) -> Result<BuildReport> {
    let loaded = match source.load() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(error = %e, "content unavailable; writing empty search index");
            let bytes = write_artifact(artifact_path, &[])?;
            return Ok(BuildReport {
                entries: 0,
                unpublished: 0,
                skipped: 0,
                artifact_path: artifact_path.to_path_buf(),
                bytes,
                degraded: true,
            });
        }
    };

    let built = build_entries(&loaded.documents, now);
    let bytes = write_artifact(artifact_path, &built.entries)?;
    let report = BuildReport {
        entries: built.entries.len(),
        unpublished: built.unpublished,
        skipped: built.skipped + loaded.skipped,
        artifact_path: artifact_path.to_path_buf(),
        bytes,
        degraded: false,
    };

    info!(
        source = %source.describe(),
        entries = report.entries,
        unpublished = report.unpublished,
        skipped = report.skipped,
        bytes = report.bytes,
        "search index generated"
    );
    Ok(report)
}

/// Filter to published posts and turn each into an [`IndexEntry`].
pub fn build_entries(docs: &[SourceDocument], now: DateTime<Utc>) -> BuiltEntries {
    let mut built = BuiltEntries::default();
    let mut eligible: Vec<&SourceDocument> = Vec::with_capacity(docs.len());

    for (index, doc) in docs.iter().enumerate() {
        match is_published(index, doc, now) {
            Ok(true) => eligible.push(doc),
            Ok(false) => built.unpublished += 1,
            Err(e) => {
                warn!(error = %e, "skipping post");
                built.skipped += 1;
            }
        }
    }

    built.entries = extract_all(&eligible);
    built
}

#[cfg(feature = "parallel")]
fn extract_all(docs: &[&SourceDocument]) -> Vec<IndexEntry> {
    let progress = ProgressBar::new(docs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━━╸"),
    );
    progress.set_prefix("Extracting");

    // par_iter + collect keeps source order
    let entries = docs
        .par_iter()
        .map(|doc| {
            let entry = IndexEntry::from_source(doc, extract_plain_text(&doc.raw));
            progress.inc(1);
            entry
        })
        .collect();

    progress.finish_and_clear();
    entries
}

#[cfg(not(feature = "parallel"))]
fn extract_all(docs: &[&SourceDocument]) -> Vec<IndexEntry> {
    docs.iter()
        .map(|doc| IndexEntry::from_source(doc, extract_plain_text(&doc.raw)))
        .collect()
}

/// Serialize entries to `path`, creating parent directories. Returns bytes written.
pub fn write_artifact(path: &Path, entries: &[IndexEntry]) -> Result<usize> {
    let write_err = |source: io::Error| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    fs::write(path, json.as_bytes()).map_err(write_err)?;
    Ok(json.len())
}
