// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! MDX to plain text, one regex pass at a time.
//!
//! This is not a markdown parser. It's a fixed sequence of substitutions that
//! gets post bodies close enough to prose for a search index. The passes are
//! order-dependent: frontmatter goes before code fences (a `---` inside a fence
//! is not frontmatter), code goes before emphasis (`*ptr` inside backticks is
//! not italics), images go before links (`![a](b)` also looks like `[a](b)`).
//!
//! Malformed input gets best-effort treatment. An unterminated fence matches
//! nothing and its body stays in the text. Nested emphasis loses its outer
//! markers only. Snake_case identifiers outside backticks lose underscores.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::MAX_CONTENT_CHARS;

/// A compiled pass and what to replace each match with.
struct Pass {
    pattern: Regex,
    replacement: &'static str,
}

impl Pass {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        // Patterns are literals in this file; a bad one is caught by the tests.
        let pattern = Regex::new(pattern).unwrap_or_else(|e| panic!("bad pass {pattern}: {e}"));
        Pass {
            pattern,
            replacement,
        }
    }
}

static PASSES: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    vec![
        // Frontmatter at the very start of the document
        Pass::new(r"\A---[\s\S]*?---\n*", ""),
        // Fenced code blocks, body and all
        Pass::new(r"```[\s\S]*?```", ""),
        // Inline code
        Pass::new(r"`[^`]+`", ""),
        // Images keep their alt text
        Pass::new(r"!\[([^\]]*)\]\([^)]+\)", "${1}"),
        // Links keep their label
        Pass::new(r"\[([^\]]+)\]\([^)]+\)", "${1}"),
        // Heading markers
        Pass::new(r"(?m)^#{1,6}\s+", ""),
        // Emphasis, strongest first
        Pass::new(r"\*\*([^*]+)\*\*", "${1}"),
        Pass::new(r"\*([^*]+)\*", "${1}"),
        Pass::new(r"__([^_]+)__", "${1}"),
        Pass::new(r"_([^_]+)_", "${1}"),
        // Blockquotes
        Pass::new(r"(?m)^>\s+", ""),
        // Bullet and numbered list markers
        Pass::new(r"(?m)^\s*[-*+]\s+", ""),
        Pass::new(r"(?m)^\s*[0-9]+\.\s+", ""),
        // Whitespace
        Pass::new(r"\n+", " "),
        Pass::new(r"\s+", " "),
    ]
});

/// Strip markdown structure from a post body, leaving searchable prose.
///
/// Deterministic and pure. The result has single spaces between words, no
/// leading or trailing whitespace, and at most [`MAX_CONTENT_CHARS`]
/// characters. Truncation can cut a word in half.
pub fn extract_plain_text(raw: &str) -> String {
    let mut text = raw.to_string();
    for pass in PASSES.iter() {
        text = pass.pattern.replace_all(&text, pass.replacement).into_owned();
    }
    truncate_chars(text.trim(), MAX_CONTENT_CHARS)
        .trim_end()
        .to_string()
}

/// First `max` characters of `text` (characters, not bytes).
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
