// src/services/period.rs

//! Period extraction for sorting lines within a date.

use std::sync::LazyLock;

use regex::Regex;

use super::normalizer::parse_digits;

/// Sort key for lines without a period number; sorts after every period.
pub const NO_PERIOD: u32 = 99;

static PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第([0-9０-９])講時").expect("valid period pattern"));

/// Period number of a line (`第3講時` → 3), or [`NO_PERIOD`].
pub fn period_of(line: &str) -> u32 {
    PERIOD
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_digits(m.as_str()))
        .unwrap_or(NO_PERIOD)
}
