// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query term expansion: which vocabulary terms does a query term reach?
//!
//! Three routes, cheapest first. The exact term, if indexed. Every term the
//! query term is a prefix of. Every term within the fuzzy edit budget. A term
//! reachable by more than one route keeps its best weight, so "rust" typed in
//! full is never demoted to a fuzzy match of itself.

use std::collections::BTreeMap;

use crate::fuzzy::{bounded_distance, max_edit_distance};
use crate::index::{InvertedIndex, Posting};
use crate::scoring::{fuzzy_weight, prefix_weight, EXACT_WEIGHT};

use super::SearchOptions;

/// An indexed term reached from a query term.
#[derive(Debug, Clone, Copy)]
pub struct Expansion<'a> {
    pub weight: f64,
    pub postings: &'a [Posting],
}

/// Vocabulary terms reachable from `query_term`, sorted by term.
pub fn expand<'a>(
    index: &'a InvertedIndex,
    query_term: &str,
    options: &SearchOptions,
) -> BTreeMap<&'a str, Expansion<'a>> {
    let mut reached: BTreeMap<&'a str, Expansion<'a>> = BTreeMap::new();
    let mut offer = |term: &'a str, weight: f64, postings: &'a [Posting]| {
        reached
            .entry(term)
            .and_modify(|e| e.weight = e.weight.max(weight))
            .or_insert(Expansion { weight, postings });
    };

    if let Some((term, postings)) = index.get(query_term) {
        offer(term, EXACT_WEIGHT, postings);
    }

    let query_chars = query_term.chars().count();

    if options.prefix {
        for (term, postings) in index.terms_with_prefix(query_term) {
            let extra = term.chars().count() - query_chars;
            if extra > 0 {
                offer(term, prefix_weight(query_chars, extra), postings);
            }
        }
    }

    let budget = max_edit_distance(query_chars, options.fuzzy, options.max_fuzzy);
    if budget > 0 {
        for (term, postings) in index.terms() {
            match bounded_distance(query_term, term, budget) {
                Some(distance) if distance > 0 => {
                    offer(term, fuzzy_weight(query_chars, distance), postings);
                }
                _ => {}
            }
        }
    }

    reached
}
