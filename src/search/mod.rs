// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! A query is tokenized like the index was, each distinct query term is
//! expanded to the vocabulary terms it reaches, and every posting of every
//! reached term adds to its document's score. Documents that match more of
//! the query's terms get multiplied up, so "rust async" prefers posts about
//! both over posts that say "rust" a lot.
//!
//! The whole thing is synchronous and allocation-light. It runs on every
//! keystroke in the browser and finishes well inside a frame for a blog-sized
//! index.

pub mod expand;

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::POST_ROUTE_PREFIX;
use crate::index::{field_doc_frequency, tokenize, Field, FieldBoosts, InvertedIndex};
use crate::scoring::bm25_plus;
use crate::scoring::ranking::{rank, Scored};
use crate::types::IndexEntry;

pub use expand::{expand, Expansion};

/// Default number of results shown.
pub const DEFAULT_LIMIT: usize = 10;

/// Fuzzy budget as a fraction of query term length.
pub const DEFAULT_FUZZY: f64 = 0.2;

/// Ceiling on the fuzzy budget, whatever the term length.
pub const DEFAULT_MAX_FUZZY: usize = 6;

/// Query-time policy. Construction of the index doesn't depend on any of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub boosts: FieldBoosts,
    /// Edit budget as a fraction of term length; 0 disables fuzzy matching.
    pub fuzzy: f64,
    pub max_fuzzy: usize,
    pub prefix: bool,
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            boosts: FieldBoosts::default(),
            fuzzy: DEFAULT_FUZZY,
            max_fuzzy: DEFAULT_MAX_FUZZY,
            prefix: true,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// What a result looks like to the page: display fields plus score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub publish_date: String,
    pub score: f64,
    /// Vocabulary terms that matched, in the order they were reached.
    pub terms: Vec<String>,
}

impl SearchHit {
    fn from_entry(entry: &IndexEntry, score: f64, terms: Vec<String>) -> Self {
        SearchHit {
            id: entry.id.clone(),
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            tags: entry.tags.clone(),
            category: entry.category.clone(),
            publish_date: entry.publish_date.clone(),
            score,
            terms,
        }
    }

    /// Page path under `route_prefix` (e.g. `/blog/<slug>`).
    pub fn path_under(&self, route_prefix: &str) -> String {
        format!("{}/{}", route_prefix.trim_end_matches('/'), self.slug)
    }

    /// Page path under the default post route.
    pub fn path(&self) -> String {
        self.path_under(POST_ROUTE_PREFIX)
    }
}

/// Per-document running total.
#[derive(Debug, Default)]
struct Accumulator {
    score: f64,
    query_terms_matched: usize,
    terms: Vec<String>,
}

/// Search an index that may not exist yet.
///
/// Blank queries return nothing without touching the index. A missing index
/// is a normal state (still loading, or failed to load) and also returns
/// nothing.
pub fn search(
    index: Option<&InvertedIndex>,
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchHit> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    match index {
        Some(index) => search_index(index, query, options),
        None => Vec::new(),
    }
}

/// Ranked hits for `query`, best first, at most `options.limit`.
pub fn search_index(index: &InvertedIndex, query: &str, options: &SearchOptions) -> Vec<SearchHit> {
    let query_terms = distinct_terms(query);
    if query_terms.is_empty() || index.is_empty() || options.limit == 0 {
        return Vec::new();
    }

    let doc_count = index.doc_count();
    let mut accumulators: HashMap<u32, Accumulator> = HashMap::new();

    for query_term in &query_terms {
        let mut matched_docs = BTreeSet::new();

        for (term, expansion) in expand(index, query_term, options) {
            let mut doc_freqs = [0usize; Field::COUNT];
            for field in Field::ALL {
                doc_freqs[field.slot()] = field_doc_frequency(expansion.postings, field);
            }

            for posting in expansion.postings {
                let relevance = bm25_plus(
                    posting.tf,
                    doc_freqs[posting.field.slot()],
                    doc_count,
                    index.field_length(posting.doc, posting.field),
                    index.avg_field_length(posting.field),
                );
                let acc = accumulators.entry(posting.doc).or_default();
                acc.score += expansion.weight * options.boosts.get(posting.field) * relevance;
                if !acc.terms.iter().any(|t| t == term) {
                    acc.terms.push(term.to_string());
                }
                matched_docs.insert(posting.doc);
            }
        }

        for doc in matched_docs {
            if let Some(acc) = accumulators.get_mut(&doc) {
                acc.query_terms_matched += 1;
            }
        }
    }

    let scored = accumulators
        .iter()
        .map(|(&doc, acc)| Scored {
            doc,
            score: acc.score * acc.query_terms_matched as f64,
        })
        .collect();

    rank(scored, options.limit)
        .into_iter()
        .filter_map(|scored| {
            let entry = index.entry(scored.doc)?;
            let terms = accumulators.remove(&scored.doc)?.terms;
            Some(SearchHit::from_entry(entry, scored.score, terms))
        })
        .collect()
}

/// Query terms, deduplicated, first occurrence order.
fn distinct_terms(query: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tokenize(query)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
