// src/services/formatter.rs

//! Notification message rendering.

use crate::models::GroupedAnnouncements;

/// Message sent when the portal lists no cancellations.
pub const NO_CANCELLATIONS: &str = "📢 現在、休講情報はありません。";

const HEADER: &str = "📢 休講情報";
const DATE_PREFIX: &str = "📅 ";
const BULLET: &str = "・";

/// Render the grouping as a LINE message, dates ascending.
pub fn format_message(grouped: &GroupedAnnouncements) -> String {
    if grouped.is_empty() {
        return NO_CANCELLATIONS.to_string();
    }

    let mut lines = vec![HEADER.to_string()];
    for (date_key, items) in grouped.iter() {
        lines.push(format!("\n{DATE_PREFIX}{}：", date_key.replace('-', "/")));
        lines.extend(items.iter().map(|item| format!("{BULLET}{item}")));
    }
    lines.join("\n")
}
