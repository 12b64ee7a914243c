// src/services/grouping.rs

//! Grouping and sorting of tagged lines.

use crate::models::{GroupedAnnouncements, TaggedLine};

use super::normalizer::date_key;
use super::period::period_of;

/// Bucket lines by date key and order each bucket by period.
///
/// Date header lines lead their bucket, followed by the remaining lines by
/// period. Lines keep their encounter order inside a bucket before sorting, and
/// the sort is stable, so lines with the same period (or none) stay in input order.
pub fn group_and_sort(lines: impl IntoIterator<Item = TaggedLine>) -> GroupedAnnouncements {
    let mut grouped = GroupedAnnouncements::new();

    for line in lines {
        grouped.bucket_mut(&line.date_key).push(line.text);
    }

    for bucket in grouped.buckets_mut() {
        bucket.sort_by_key(|text| (date_key(text).is_none(), period_of(text)));
    }

    grouped
}
