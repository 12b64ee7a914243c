// src/utils/log.rs

//! Progress logging helpers.
//!
//! Thin wrappers over the `log` facade that keep pipeline output in one
//! consistent shape. The binary decides where the records go.

use std::fmt::Display;

const RULE_WIDTH: usize = 60;

/// Log a header
pub fn header(title: &str) {
    log::info!("{}", "═".repeat(RULE_WIDTH));
    log::info!("  {}", title);
    log::info!("{}", "═".repeat(RULE_WIDTH));
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: impl Display) {
    log::info!("{}", format_step(step_num, total, message));
}

/// Log a success message
pub fn success(message: &str) {
    log::info!("✓ {}", message);
}

/// Log a sub-item (indented)
pub fn sub_item(message: &str) {
    log::info!("    {}", message);
}

fn format_step(step_num: usize, total: usize, message: impl Display) -> String {
    format!("[STEP {}/{}] {}", step_num, total, message)
}
