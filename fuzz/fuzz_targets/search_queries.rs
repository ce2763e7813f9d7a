// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Emoji, RTL text, combining marks, queries longer than the posts they
//! search. None of it should crash, and every result list must stay capped
//! and sorted.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use postsearch::search::{search, SearchOptions};
use postsearch::testing::make_entry;
use postsearch::InvertedIndex;

fuzz_target!(|query: &str| {
    static INDEX: OnceLock<InvertedIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        InvertedIndex::build(vec![
            make_entry("rust", "Intro to Rust", "ownership borrowing lifetimes"),
            make_entry("cafe", "Café notes", "naïve résumé über tōkyō"),
            make_entry("telugu", "తెలుగు", "హరీష్ search"),
        ])
    });

    let options = SearchOptions::default();
    let hits = search(Some(index), query, &options);
    assert!(hits.len() <= options.limit);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    if query.trim().is_empty() {
        assert!(hits.is_empty());
    }
});
