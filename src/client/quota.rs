//! Remaining-call bookkeeping.
//!
//! The upstream reports one counter per quota category in headers shaped like
//! `x-ratelimit-<category>-remaining`. After every response the client swaps in
//! a fresh [`QuotaSnapshot`] built from exactly those headers.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Serialize;

const HEADER_PREFIX: &str = "x-ratelimit-";
const HEADER_SUFFIX: &str = "-remaining";

/// Quota categories the upstream is known to meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaCategory {
    /// Full requests
    Requests,
    /// Lightweight requests (autocomplete, classification, conversions)
    TinyRequests,
    /// Result units, usually charged per returned item
    Results,
}

impl QuotaCategory {
    pub const ALL: [QuotaCategory; 3] = [
        QuotaCategory::Requests,
        QuotaCategory::TinyRequests,
        QuotaCategory::Results,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuotaCategory::Requests => "requests",
            QuotaCategory::TinyRequests => "tinyrequests",
            QuotaCategory::Results => "results",
        }
    }

    /// Name of the response header carrying this category's remaining count.
    pub fn header_name(&self) -> String {
        format!("{HEADER_PREFIX}{}{HEADER_SUFFIX}", self.as_str())
    }
}

impl fmt::Display for QuotaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remaining counts as reported by the most recent response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaSnapshot {
    remaining: BTreeMap<String, i64>,
    captured_at: DateTime<Utc>,
}

impl QuotaSnapshot {
    /// Reads every `x-ratelimit-<category>-remaining` header.
    ///
    /// Headers whose value is not an integer are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut remaining = BTreeMap::new();
        for (name, value) in headers {
            let Some(category) = name
                .as_str()
                .strip_prefix(HEADER_PREFIX)
                .and_then(|rest| rest.strip_suffix(HEADER_SUFFIX))
            else {
                continue;
            };
            if category.is_empty() {
                continue;
            }
            match value.to_str().ok().and_then(|v| v.trim().parse::<i64>().ok()) {
                Some(count) => {
                    remaining.insert(category.to_string(), count);
                }
                None => tracing::debug!("Ignoring unparsable quota header {}: {:?}", name, value),
            }
        }
        Self {
            remaining,
            captured_at: Utc::now(),
        }
    }

    pub fn get(&self, category: &str) -> Option<i64> {
        self.remaining.get(category).copied()
    }

    pub fn remaining(&self, category: QuotaCategory) -> Option<i64> {
        self.get(category.as_str())
    }

    /// The category with the fewest calls left.
    pub fn min(&self) -> Option<(&str, i64)> {
        self.remaining
            .iter()
            .min_by_key(|(_, count)| **count)
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.remaining.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn reads_known_and_unknown_categories() {
        let snapshot = QuotaSnapshot::from_headers(&headers(&[
            ("x-ratelimit-requests-remaining", "42"),
            ("x-ratelimit-tinyrequests-remaining", "900"),
            ("x-ratelimit-videos-remaining", "3"),
            ("content-type", "application/json"),
        ]));

        assert_eq!(snapshot.remaining(QuotaCategory::Requests), Some(42));
        assert_eq!(snapshot.remaining(QuotaCategory::TinyRequests), Some(900));
        assert_eq!(snapshot.remaining(QuotaCategory::Results), None);
        assert_eq!(snapshot.get("videos"), Some(3));
        assert_eq!(snapshot.iter().count(), 3);
    }

    #[test]
    fn min_picks_the_scarcest_category() {
        let snapshot = QuotaSnapshot::from_headers(&headers(&[
            ("x-ratelimit-requests-remaining", "42"),
            ("x-ratelimit-results-remaining", "-2"),
        ]));

        assert_eq!(snapshot.min(), Some(("results", -2)));
    }

    #[test]
    fn garbage_values_are_skipped() {
        let snapshot = QuotaSnapshot::from_headers(&headers(&[
            ("x-ratelimit-requests-remaining", "lots"),
            ("x-ratelimit--remaining", "1"),
        ]));

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.min(), None);
    }

    #[test]
    fn header_names_match_the_upstream_format() {
        assert_eq!(
            QuotaCategory::TinyRequests.header_name(),
            "x-ratelimit-tinyrequests-remaining"
        );
    }
}
