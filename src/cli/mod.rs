// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the postsearch command-line interface.
//!
//! With no subcommand, `postsearch` builds the artifact with default paths,
//! which is what the site's prebuild hook runs. `inspect` summarizes an
//! artifact and `search` queries one through the same client the browser
//! uses, handy for checking ranking without a browser.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use postsearch::config::{BuildConfig, ARTIFACT_NAME, DEFAULT_CONTENT_PATH, DEFAULT_OUTPUT_DIR};
use postsearch::search::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(
    name = "postsearch",
    about = "Static search index builder for the blog",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Build options for the bare `postsearch` invocation
    #[command(flatten)]
    pub build: BuildArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search-index.json from the content pipeline output (default)
    Build(BuildArgs),

    /// Summarize a built artifact
    Inspect {
        /// Path to search-index.json
        #[arg(default_value_t = default_artifact_path())]
        file: String,
    },

    /// Search a built artifact and display ranked results
    Search {
        /// Search query
        query: String,

        /// Path to search-index.json
        #[arg(short, long, default_value_t = default_artifact_path())]
        artifact: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Content pipeline output (JSON array of posts)
    #[arg(short, long, env = "POSTSEARCH_CONTENT", default_value = DEFAULT_CONTENT_PATH)]
    pub content: PathBuf,

    /// Directory the artifact is written into
    #[arg(short, long, env = "POSTSEARCH_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

impl From<BuildArgs> for BuildConfig {
    fn from(args: BuildArgs) -> Self {
        BuildConfig::default()
            .with_content_path(args.content)
            .with_output_dir(args.output)
    }
}

fn default_artifact_path() -> String {
    format!("{DEFAULT_OUTPUT_DIR}/{ARTIFACT_NAME}")
}
