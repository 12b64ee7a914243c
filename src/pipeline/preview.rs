// src/pipeline/preview.rs

//! Offline preview of a saved page or text block.

use scraper::Selector;

use crate::models::GroupedAnnouncements;
use crate::services::{extract_block, format_message, parse_announcements};

/// Result of parsing a local input.
#[derive(Debug, Clone)]
pub struct Preview {
    pub grouped: GroupedAnnouncements,
    pub message: String,
}

/// Parse `input` the same way a live run would, without side effects.
///
/// With a selector, `input` is treated as an HTML page and the announcement
/// block is extracted first.
pub fn run_preview(input: &str, selector: Option<&Selector>) -> Preview {
    let grouped = match selector {
        Some(selector) => parse_announcements(&extract_block(input, selector)),
        None => parse_announcements(input),
    };
    let message = format_message(&grouped);
    Preview { grouped, message }
}
