// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning text into terms.
//!
//! Words are runs of alphanumeric characters; everything else separates
//! them. "rust-colored" is two terms, "C++" is one ("c"). The text is
//! normalized before it is split, so "Café" and "cafe" land on the same term
//! whether the accent arrives precomposed or as a combining mark. Queries go through
//! the exact same path, which is what makes exact matches line up.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase and strip diacritics.
///
/// NFD first, so "é" becomes "e" + U+0301, then drop the combining mark.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. The WASM build skips the normalization tables to stay
/// small, so accented and plain spellings are distinct terms there.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Combining diacritical mark ranges (category Mn, the common blocks).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// Split text into normalized terms, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    // Combining marks are not alphanumeric, so they must go before splitting.
    normalize(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
