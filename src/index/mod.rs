// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make search fast.
//!
//! - **Fields**: which parts of a post are searchable and how much each counts
//! - **Tokenizer**: text to lowercase, accent-folded terms
//! - **Inverted index**: term to postings, with per-field lengths for BM25+
//!
//! The index is built in memory from the artifact on every page load. Nothing
//! here is serialized; the artifact is the only persisted form.

mod fields;
mod inverted;
mod tokenizer;

pub use fields::*;
pub use inverted::*;
pub use tokenizer::*;
