//! Persisted snapshot of the latest grouping.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::GroupedAnnouncements;

/// Timestamp layout of `updated_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot written once per run, replacing the previous file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Local wall-clock time of the run
    pub updated_at: String,

    /// Grouped announcement lines
    pub data: GroupedAnnouncements,
}

impl Snapshot {
    /// Create a snapshot stamped with the current local time.
    pub fn new(data: GroupedAnnouncements) -> Self {
        Self::at(data, Local::now().naive_local())
    }

    /// Create a snapshot stamped with the given time.
    pub fn at(data: GroupedAnnouncements, time: NaiveDateTime) -> Self {
        Self {
            updated_at: time.format(TIMESTAMP_FORMAT).to_string(),
            data,
        }
    }
}
