//! Service layer for the notice checker.
//!
//! This module contains the business logic for:
//! - Line normalization and date tagging (`normalize_lines`)
//! - Period extraction (`period_of`)
//! - Grouping by date (`group_and_sort`)
//! - Message rendering (`format_message`)
//! - Portal fetching (`PortalFetcher`)
//! - LINE delivery (`LineNotifier`)

mod formatter;
mod grouping;
mod normalizer;
mod notifier;
mod period;
mod portal;

pub use formatter::{NO_CANCELLATIONS, format_message};
pub use grouping::group_and_sort;
pub use normalizer::{date_key, normalize_lines};
pub use notifier::{DeliveryStatus, LineNotifier, Notifier};
pub use period::{NO_PERIOD, period_of};
pub use portal::{AnnouncementSource, PortalFetcher, extract_block, parse_selector};

use crate::models::GroupedAnnouncements;

/// Normalize and group raw announcement text in one go.
pub fn parse_announcements(raw: &str) -> GroupedAnnouncements {
    group_and_sort(normalize_lines(raw))
}
