// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The allowed distance grows with the query term: a fixed fraction of its
//! length, rounded, with a hard ceiling. Short terms get little or no slack
//! ("go" allows nothing at 20%), long ones get a couple of edits.

mod levenshtein;

pub use levenshtein::*;

/// Edit budget for a query term of `term_chars` characters.
///
/// `round(term_chars * fraction)`, capped at `max`. A non-positive fraction
/// disables fuzzy matching.
pub fn max_edit_distance(term_chars: usize, fraction: f64, max: usize) -> usize {
    if fraction <= 0.0 {
        return 0;
    }
    ((term_chars as f64 * fraction).round() as usize).min(max)
}
