// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Relevance is BM25+ per field, scaled by the field's boost and by how
//! directly the query term matched. Ranking is a plain sort on the total with
//! artifact order breaking ties.

mod core;
pub mod ranking;

pub use core::*;
