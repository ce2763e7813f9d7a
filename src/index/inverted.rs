// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index over the artifact entries.
//!
//! # Invariants
//!
//! 1. **POSTINGS_SORTED**: each posting list is sorted by (doc, field slot),
//!    which falls out of building in artifact order.
//! 2. **ONE_POSTING_PER_FIELD**: a (doc, field) pair appears at most once per
//!    term; repeats are folded into `tf`.
//! 3. **NON_EMPTY**: every vocabulary term has at least one posting.
//! 4. **LENGTHS_ALIGNED**: `field_lengths.len() == entries.len()`.
//!
//! The vocabulary is a `BTreeMap` so prefix lookup is a range scan starting
//! at the prefix itself. Small blogs have a few thousand distinct terms, so
//! nothing fancier than that is worth the bytes.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::index::fields::Field;
use crate::index::tokenizer::tokenize;
use crate::types::IndexEntry;

/// One term occurrence summary: which doc, which field, how many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc: u32,
    pub field: Field,
    pub tf: u32,
}

#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    entries: Vec<IndexEntry>,
    terms: BTreeMap<String, Vec<Posting>>,
    /// Token count per (doc, field slot).
    field_lengths: Vec<[u32; Field::COUNT]>,
    avg_field_lengths: [f64; Field::COUNT],
}

impl InvertedIndex {
    /// Index every entry. Document ids are positions in `entries`.
    pub fn build(entries: Vec<IndexEntry>) -> Self {
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
        let mut field_lengths = Vec::with_capacity(entries.len());
        let mut totals = [0u64; Field::COUNT];

        for (doc, entry) in entries.iter().enumerate() {
            let doc = doc as u32;
            let mut lengths = [0u32; Field::COUNT];

            for field in Field::ALL {
                let tokens = tokenize(&field.text(entry));
                lengths[field.slot()] = tokens.len() as u32;
                totals[field.slot()] += tokens.len() as u64;

                for token in tokens {
                    let postings = terms.entry(token).or_default();
                    match postings.last_mut() {
                        Some(last) if last.doc == doc && last.field == field => last.tf += 1,
                        _ => postings.push(Posting { doc, field, tf: 1 }),
                    }
                }
            }

            field_lengths.push(lengths);
        }

        let mut avg_field_lengths = [0.0; Field::COUNT];
        if !entries.is_empty() {
            for (avg, total) in avg_field_lengths.iter_mut().zip(totals) {
                *avg = total as f64 / entries.len() as f64;
            }
        }

        InvertedIndex {
            entries,
            terms,
            field_lengths,
            avg_field_lengths,
        }
    }

    pub fn doc_count(&self) -> usize {
        self.entries.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn entry(&self, doc: u32) -> Option<&IndexEntry> {
        self.entries.get(doc as usize)
    }

    /// Postings for an exact term.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Exact term lookup that also hands back the index's own copy of the term.
    pub fn get(&self, term: &str) -> Option<(&str, &[Posting])> {
        self.terms
            .get_key_value(term)
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Every vocabulary term starting with `prefix` (including `prefix` itself).
    pub fn terms_with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        let owned = prefix.to_string();
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(owned.as_str()))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// The whole vocabulary, sorted.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Token count of `field` in `doc`.
    pub fn field_length(&self, doc: u32, field: Field) -> u32 {
        self.field_lengths
            .get(doc as usize)
            .map_or(0, |lengths| lengths[field.slot()])
    }

    /// Mean token count of `field` across all docs.
    pub fn avg_field_length(&self, field: Field) -> f64 {
        self.avg_field_lengths[field.slot()]
    }
}

/// Number of docs whose `field` contains the term these postings belong to.
pub fn field_doc_frequency(postings: &[Posting], field: Field) -> usize {
    // One posting per (doc, field), so counting postings counts docs.
    postings.iter().filter(|p| p.field == field).count()
}
