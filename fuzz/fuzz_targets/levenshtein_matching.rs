// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The early exits must never change the answer: whatever `bounded_distance`
//! returns has to agree with a plain full-matrix Levenshtein.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use postsearch::fuzzy::bounded_distance;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fn full_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cur = row[j + 1];
            row[j + 1] = (cur + 1).min(row[j] + 1).min(prev + usize::from(ac != *bc));
            prev = cur;
        }
    }
    row[b.len()]
}

fuzz_target!(|input: MatchInput| {
    // Long inputs only slow the fuzzer down
    if input.query.len() > 64 || input.target.len() > 64 {
        return;
    }
    let max = usize::from(input.max % 8);
    let expected = full_distance(&input.query, &input.target);
    let bounded = bounded_distance(&input.query, &input.target, max);
    match bounded {
        Some(d) => assert_eq!(d, expected),
        None => assert!(expected > max),
    }
});
