//! Markdown to plain text, on realistic post bodies.

use postsearch::build::extract_plain_text;
use postsearch::types::MAX_CONTENT_CHARS;

#[test]
fn test_realistic_post() {
    let raw = "---\ntitle: Hello\n---\n\n# Getting started\n\n\
               Install with `cargo add serde` and read [the docs](https://serde.rs).\n\n\
               ```rust\nfn main() {}\n```\n\n\
               > Note: **really** important\n\n\
               - first item\n- second item\n1. numbered\n";
    assert_eq!(
        extract_plain_text(raw),
        "Getting started Install with and read the docs. Note: really important \
         first item second item numbered"
    );
}

#[test]
fn test_image_alt_text_is_kept() {
    assert_eq!(
        extract_plain_text("Look: ![a diagram](/img/d.png) here"),
        "Look: a diagram here"
    );
}

#[test]
fn test_long_body_is_capped() {
    let raw = "word ".repeat(1000);
    let text = extract_plain_text(&raw);
    assert_eq!(text.chars().count(), MAX_CONTENT_CHARS);
}

#[test]
fn test_multibyte_cap_counts_characters() {
    let raw = "ā".repeat(MAX_CONTENT_CHARS + 10);
    assert_eq!(extract_plain_text(&raw).chars().count(), MAX_CONTENT_CHARS);
}
