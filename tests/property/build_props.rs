//! Builder invariants: eligibility, extraction idempotence, the length cap.

use chrono::Duration;
use proptest::prelude::*;

use postsearch::build::{build_entries, extract_plain_text};
use postsearch::types::MAX_CONTENT_CHARS;

use crate::common::{fixed_now, make_source};

/// Plain prose: words and single spaces, nothing markdown would touch.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9]{1,10}", 0..40).prop_map(|words| words.join(" "))
}

/// Anything a post body might contain, markdown syntax included.
fn markdownish_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,8}",
            Just("**".to_string()),
            Just("_".to_string()),
            Just("`".to_string()),
            Just("```".to_string()),
            Just("---".to_string()),
            Just("\n".to_string()),
            Just("# ".to_string()),
            Just("[".to_string()),
            Just("](".to_string()),
            Just(")".to_string()),
            Just("![".to_string()),
            Just("- ".to_string()),
            Just("> ".to_string()),
            Just("1. ".to_string()),
            Just(" ".to_string()),
            Just("ā".to_string()),
        ],
        0..200,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Only non-draft posts dated at or before now make it in.
    #[test]
    fn prop_only_published_posts_survive(
        posts in prop::collection::vec((any::<bool>(), -1000i64..1000), 0..20)
    ) {
        let now = fixed_now();
        let docs: Vec<_> = posts
            .iter()
            .enumerate()
            .map(|(i, (draft, offset_hours))| {
                let date = (now + Duration::hours(*offset_hours)).to_rfc3339();
                let mut doc = make_source(&format!("p{i}"), "T", &date);
                doc.draft = *draft;
                doc
            })
            .collect();

        let built = build_entries(&docs, now);
        let expected: Vec<String> = posts
            .iter()
            .enumerate()
            .filter(|(_, (draft, offset))| !draft && *offset <= 0)
            .map(|(i, _)| format!("p{i}"))
            .collect();
        let actual: Vec<String> = built.entries.iter().map(|e| e.slug.clone()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(built.entries.len() + built.unpublished, docs.len());
    }

    /// Text with no markdown syntax comes out unchanged.
    #[test]
    fn prop_plain_text_is_a_fixed_point(text in plain_text_strategy()) {
        prop_assume!(text.chars().count() <= MAX_CONTENT_CHARS);
        prop_assert_eq!(extract_plain_text(&text), text);
    }

    /// Output never exceeds the cap and never has edge or doubled whitespace.
    #[test]
    fn prop_extraction_is_capped_and_tidy(raw in markdownish_strategy()) {
        let text = extract_plain_text(&raw);
        prop_assert!(text.chars().count() <= MAX_CONTENT_CHARS);
        prop_assert!(!text.contains('\n'));
        prop_assert!(!text.contains("  "));
        prop_assert_eq!(text.trim(), text.as_str());
    }

    /// Long bodies are cut to exactly the cap.
    #[test]
    fn prop_long_bodies_hit_the_cap(word in "[a-z]{3,8}", repeats in 500usize..1500) {
        let raw = format!("{word} ").repeat(repeats);
        prop_assume!(raw.trim().chars().count() > MAX_CONTENT_CHARS);
        prop_assert_eq!(extract_plain_text(&raw).chars().count(), MAX_CONTENT_CHARS);
    }
}
