//! Cancellation notice data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One announcement line tagged with the date header it falls under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    /// Zero-padded `MM-DD` key
    pub date_key: String,

    /// Trimmed line text
    pub text: String,
}

impl TaggedLine {
    pub fn new(date_key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date_key: date_key.into(),
            text: text.into(),
        }
    }
}

/// Announcement lines bucketed by date key.
///
/// Keys iterate in ascending order, which for zero-padded `MM-DD` keys is
/// month/day order. The order of lines inside a bucket is whatever the
/// grouping step stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedAnnouncements(BTreeMap<String, Vec<String>>);

impl GroupedAnnouncements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of lines across all dates.
    pub fn line_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, date_key: &str) -> Option<&[String]> {
        self.0.get(date_key).map(Vec::as_slice)
    }

    /// Iterate `(date_key, lines)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub(crate) fn bucket_mut(&mut self, date_key: &str) -> &mut Vec<String> {
        self.0.entry(date_key.to_string()).or_default()
    }

    pub(crate) fn buckets_mut(&mut self) -> impl Iterator<Item = &mut Vec<String>> {
        self.0.values_mut()
    }
}

impl FromIterator<(String, Vec<String>)> for GroupedAnnouncements {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
