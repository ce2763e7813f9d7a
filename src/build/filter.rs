// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which posts are live.
//!
//! A post is published when it isn't a draft and its publish date has
//! passed. "Now" is captured once per build and passed in, so a build that
//! straddles midnight sees one consistent cutoff.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Error;
use crate::types::SourceDocument;

/// Parse a publish date as RFC 3339 or as a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Is this post visible at `now`?
///
/// Errors only when the publish date can't be read. Callers skip the post.
pub fn is_published(
    index: usize,
    doc: &SourceDocument,
    now: DateTime<Utc>,
) -> Result<bool, Error> {
    if doc.draft {
        return Ok(false);
    }
    let published_at =
        parse_publish_date(&doc.publish_date).ok_or_else(|| Error::MalformedEntry {
            index,
            reason: format!(
                "post '{}' has unreadable publishDate '{}'",
                doc.slug, doc.publish_date
            ),
        })?;
    Ok(published_at <= now)
}
