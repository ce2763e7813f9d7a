//! Client-side search for a static blog.
//!
//! Two halves that share one JSON artifact. At build time the index builder
//! reads posts from the content pipeline, drops drafts and future posts,
//! strips the markdown and writes `search-index.json`. In the browser the
//! search client fetches that file once, builds an inverted index in memory
//! and answers every keystroke with fuzzy, prefix-aware, field-boosted
//! results.
//!
//! # Architecture
//!
//! ```text
//!  build time                                  page load / keystroke
//! ┌──────────────┐   ┌────────────────────┐   ┌─────────────┐   ┌────────────┐
//! │build::content│──▶│build::{filter,     │──▶│client       │──▶│search      │
//! │ (posts.json) │   │        extract}    │   │ (load once) │   │ (rank top) │
//! └──────────────┘   └─────────┬──────────┘   └──────┬──────┘   └─────┬──────┘
//!                              ▼                     ▼                ▼
//!                    public/search-index.json   index::InvertedIndex  client::dialog
//! ```
//!
//! # Modules
//!
//! | Module    | Role                                                  |
//! |-----------|-------------------------------------------------------|
//! | `build`   | Posts in, artifact out                                |
//! | `index`   | Fields, tokenizer, inverted index                     |
//! | `fuzzy`   | Bounded Levenshtein distance and edit budgets         |
//! | `scoring` | BM25+, match weights, result ordering                 |
//! | `search`  | Query expansion and ranked hits                       |
//! | `client`  | One-shot artifact loading and the dialog state machine|
//! | `wasm`    | Browser bindings (feature `wasm`)                     |
//!
//! # Usage
//!
//! ```ignore
//! use postsearch::client::SearchClient;
//! use postsearch::search::SearchOptions;
//!
//! let mut client = SearchClient::new(SearchOptions::default());
//! client.complete_load(Ok(std::fs::read("public/search-index.json")?));
//! for hit in client.search("rust async") {
//!     println!("{} {}", hit.path(), hit.title);
//! }
//! ```

pub mod build;
pub mod client;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod summary;
pub mod testing;
pub mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use build::{run_build, BuildReport};
pub use client::{
    ArtifactSource, DialogConfig, DialogState, FileArtifact, KeyPress, LoadStatus, Navigation,
    SearchClient, SearchDialog,
};
pub use config::BuildConfig;
pub use error::{Error, Result};
pub use index::{Field, FieldBoosts, InvertedIndex};
pub use search::{search, SearchHit, SearchOptions};
pub use types::{IndexEntry, SearchArtifact, SourceDocument};

#[cfg(feature = "wasm")]
pub use wasm::SearchWidget;
