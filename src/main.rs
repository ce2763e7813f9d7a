// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postsearch::build::run_build;
use postsearch::client::{FileArtifact, SearchClient};
use postsearch::config::{BuildConfig, POST_ROUTE_PREFIX};
use postsearch::search::SearchOptions;
use postsearch::summary::ArtifactSummary;
use postsearch::types::{SearchArtifact, MAX_CONTENT_CHARS};

mod cli;
use cli::{display, Cli, Commands};

/// Log filter variable; `info` when unset.
const LOG_ENV: &str = "POSTSEARCH_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        None => build(cli.build.into()),
        Some(Commands::Build(args)) => build(args.into()),
        Some(Commands::Inspect { file }) => inspect(&file),
        Some(Commands::Search {
            query,
            artifact,
            limit,
        }) => search(&artifact, &query, limit),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Missing content still exits 0; only failing to write the artifact fails.
fn build(config: BuildConfig) -> Result<()> {
    let start = Instant::now();
    let report = run_build(&config).with_context(|| {
        format!(
            "failed to generate search index at {}",
            config.artifact_path().display()
        )
    })?;
    display::print_build_report(&report, start.elapsed());
    Ok(())
}

fn inspect(path: &str) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path))?;
    let entries: SearchArtifact = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a search index artifact", path))?;
    let summary = ArtifactSummary::from_entries(&entries, MAX_CONTENT_CHARS);
    display::print_summary(path, bytes.len(), &summary);
    Ok(())
}

fn search(path: &str, query: &str, limit: usize) -> Result<()> {
    let options = SearchOptions {
        limit,
        ..SearchOptions::default()
    };
    let mut client = SearchClient::new(options);
    client.load_from(&FileArtifact::new(path));
    if client.index().is_none() {
        anyhow::bail!("could not load search index from {}", path);
    }

    let start = Instant::now();
    let hits = client.search(query);
    display::print_results(query, &hits, POST_ROUTE_PREFIX, start.elapsed());
    Ok(())
}
