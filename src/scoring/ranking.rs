// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Score descending, then artifact position ascending. The second key makes
//! the order total, so equal scores come out in the order the builder wrote
//! the posts and repeated queries give identical lists.

use std::cmp::Ordering;

/// A document's accumulated score, before it becomes a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub doc: u32,
    pub score: f64,
}

/// Compare two scored docs for ranking. `Less` means `a` ranks first.
pub fn compare_scored(a: &Scored, b: &Scored) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        // Equal, or a NaN we refuse to let scramble the order
        _ => a.doc.cmp(&b.doc),
    }
}

/// Sort best-first and keep at most `limit`.
pub fn rank(mut scored: Vec<Scored>, limit: usize) -> Vec<Scored> {
    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored
}
