//! Search invariants: prefix and fuzzy reach, the cap, ordering, blank queries.

use proptest::prelude::*;

use postsearch::fuzzy::bounded_distance;
use postsearch::search::{search, SearchOptions, DEFAULT_LIMIT};
use postsearch::{IndexEntry, InvertedIndex};

use crate::common::make_entry;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,10}"
}

/// A small blog: each post has a title and a body of random words.
fn corpus_strategy(max_docs: usize) -> impl Strategy<Value = Vec<IndexEntry>> {
    prop::collection::vec(
        (
            prop::collection::vec(word_strategy(), 1..4),
            prop::collection::vec(word_strategy(), 0..12),
        ),
        1..max_docs,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, body))| {
                make_entry(&format!("post-{i}"), &title.join(" "), &body.join(" "))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Every prefix of an indexed title word finds that post.
    #[test]
    fn prop_prefix_reaches_indexed_words(
        corpus in corpus_strategy(DEFAULT_LIMIT),
        pick in any::<prop::sample::Index>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let doc = pick.index(corpus.len());
        let word = corpus[doc].title.split(' ').next().unwrap().to_string();
        let prefix = &word[..1 + cut.index(word.len())];

        let index = InvertedIndex::build(corpus.clone());
        let hits = search(Some(&index), prefix, &SearchOptions::default());
        prop_assert!(hits.iter().any(|h| h.slug == corpus[doc].slug));
    }

    /// One substitution in a word of five or more letters still finds the post.
    #[test]
    fn prop_single_typo_is_forgiven(
        corpus in corpus_strategy(DEFAULT_LIMIT),
        word in "[a-z]{5,10}",
        at in any::<prop::sample::Index>(),
        replacement in "[a-z]",
    ) {
        let position = at.index(word.len());
        prop_assume!(word[position..=position] != replacement);
        let mut typo = word.clone();
        typo.replace_range(position..=position, &replacement);

        let mut corpus = corpus;
        corpus[0].content = format!("{} {}", corpus[0].content, word);
        let index = InvertedIndex::build(corpus.clone());

        let hits = search(Some(&index), &typo, &SearchOptions::default());
        prop_assert!(hits.iter().any(|h| h.slug == corpus[0].slug));
    }

    /// Never more than the limit, always best first.
    #[test]
    fn prop_results_capped_and_sorted(
        corpus in corpus_strategy(30),
        query in prop::collection::vec(word_strategy(), 1..3),
    ) {
        let index = InvertedIndex::build(corpus);
        let hits = search(Some(&index), &query.join(" "), &SearchOptions::default());
        prop_assert!(hits.len() <= DEFAULT_LIMIT);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for hit in &hits {
            prop_assert!(hit.score.is_finite() && hit.score > 0.0);
        }
    }

    /// Whitespace-only queries return nothing.
    #[test]
    fn prop_blank_queries_are_empty(
        corpus in corpus_strategy(5),
        blank in "[ \t\n]{0,6}",
    ) {
        let index = InvertedIndex::build(corpus);
        prop_assert!(search(Some(&index), &blank, &SearchOptions::default()).is_empty());
    }

    /// Distance is symmetric and the bound is respected.
    #[test]
    fn prop_bounded_distance_consistent(a in "[a-z]{0,8}", b in "[a-z]{0,8}", max in 0usize..4) {
        let ab = bounded_distance(&a, &b, max);
        prop_assert_eq!(ab, bounded_distance(&b, &a, max));
        if let Some(d) = ab {
            prop_assert!(d <= max);
        }
        prop_assert_eq!(bounded_distance(&a, &a, max), Some(0));
    }
}
