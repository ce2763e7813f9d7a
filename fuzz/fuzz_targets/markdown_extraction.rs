// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for markdown stripping.
//!
//! Post bodies are written by people, half-finished fences and all. The
//! extractor must never panic and must always respect the length cap and
//! whitespace normalization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use postsearch::build::extract_plain_text;
use postsearch::types::MAX_CONTENT_CHARS;

fuzz_target!(|raw: &str| {
    let text = extract_plain_text(raw);
    assert!(text.chars().count() <= MAX_CONTENT_CHARS);
    assert!(!text.contains('\n'));
    assert!(!text.starts_with(char::is_whitespace));
});
