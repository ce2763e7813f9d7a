// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for artifact loading.
//!
//! Whatever the server hands back (an HTML error page, a truncated file,
//! random bytes) the client ends up `Ready` or `Failed`, never panicking and
//! never stuck `Pending`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use postsearch::client::SearchClient;

fuzz_target!(|bytes: &[u8]| {
    let mut client = SearchClient::default();
    client.complete_load(Ok(bytes.to_vec()));
    assert!(!client.is_loading());
    let _ = client.search("rust");
});
