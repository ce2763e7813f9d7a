// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A match contributes `match weight × field boost × BM25+`. The match weight
//! says how the query term reached the indexed term (exact, prefix, fuzzy).
//! The field boost says where it landed. BM25+ says how much that occurrence
//! is worth given term frequency, field length and rarity.
//!
//! # Key Invariant: Exact Beats Approximate
//!
//! ```text
//! exact (1.0) > any prefix (≤ 0.375) and any fuzzy (< 0.45)
//! ```
//!
//! Prefix and fuzzy weights both shrink as the indexed term drifts further
//! from the query term, so "prog" → "program" outranks "prog" → "programming".
//!
//! # Constants
//!
//! | Name          | Value | Role                                       |
//! |---------------|-------|--------------------------------------------|
//! | BM25_K1       | 1.2   | Term-frequency saturation                  |
//! | BM25_B        | 0.7   | Field-length normalization strength        |
//! | BM25_DELTA    | 0.5   | BM25+ floor so long fields still score     |
//! | PREFIX_WEIGHT | 0.375 | Ceiling for prefix expansions              |
//! | FUZZY_WEIGHT  | 0.45  | Ceiling for fuzzy expansions               |

/// Term-frequency saturation.
pub const BM25_K1: f64 = 1.2;

/// Length normalization.
pub const BM25_B: f64 = 0.7;

/// Lower bound added to the tf component (the "+" in BM25+).
pub const BM25_DELTA: f64 = 0.5;

/// Weight of an exact term match.
pub const EXACT_WEIGHT: f64 = 1.0;

/// Maximum weight of a prefix expansion.
pub const PREFIX_WEIGHT: f64 = 0.375;

/// Maximum weight of a fuzzy expansion.
pub const FUZZY_WEIGHT: f64 = 0.45;

/// Inverse document frequency: `ln(1 + (N - df + 0.5) / (df + 0.5))`.
///
/// Always positive, even for a term in every document.
pub fn idf(doc_freq: usize, doc_count: usize) -> f64 {
    let n = doc_count as f64;
    let df = doc_freq as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// BM25+ for one term occurrence summary in one field.
pub fn bm25_plus(
    term_freq: u32,
    doc_freq: usize,
    doc_count: usize,
    field_len: u32,
    avg_field_len: f64,
) -> f64 {
    let tf = f64::from(term_freq);
    let length_ratio = if avg_field_len > 0.0 {
        f64::from(field_len) / avg_field_len
    } else {
        1.0
    };
    let tf_component =
        tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * length_ratio));
    idf(doc_freq, doc_count) * (BM25_DELTA + tf_component)
}

/// Weight for an indexed term reached by extending the query term.
///
/// `extra_chars` is how many characters the indexed term adds.
pub fn prefix_weight(query_chars: usize, extra_chars: usize) -> f64 {
    let q = query_chars as f64;
    PREFIX_WEIGHT * q / (q + 0.3 * extra_chars as f64)
}

/// Weight for an indexed term within `distance` edits of the query term.
pub fn fuzzy_weight(query_chars: usize, distance: usize) -> f64 {
    let q = query_chars as f64;
    FUZZY_WEIGHT * q / (q + distance as f64)
}
