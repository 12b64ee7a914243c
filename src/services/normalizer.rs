// src/services/normalizer.rs

//! Line normalizer.
//!
//! Turns the raw announcement block into a flat list of lines, each tagged
//! with the `MM-DD` key of the date header it falls under.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::TaggedLine;

/// `12月1日(月)`: month, 月, day, 日, then a parenthesised weekday.
static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9０-９]{1,2})月([0-9０-９]{1,2})日\(.+?\)").expect("valid date header pattern")
});

/// Return the `MM-DD` key if the line contains a date header anywhere.
pub fn date_key(line: &str) -> Option<String> {
    let caps = DATE_HEADER.captures(line)?;
    let month = parse_digits(caps.get(1)?.as_str())?;
    let day = parse_digits(caps.get(2)?.as_str())?;
    Some(format!("{month:02}-{day:02}"))
}

/// Split, clean and tag every line of the raw text.
///
/// Lines before the first date header are dropped. A header line is tagged
/// with the key it introduces.
pub fn normalize_lines(raw: &str) -> Vec<TaggedLine> {
    let mut current: Option<String> = None;
    let mut tagged = Vec::new();

    for line in clean_lines(raw) {
        if let Some(key) = date_key(&line) {
            current = Some(key);
        }
        if let Some(key) = &current {
            tagged.push(TaggedLine::new(key.clone(), line));
        }
    }

    tagged
}

/// Trim lines, swap non-breaking spaces for plain ones and skip blanks.
fn clean_lines(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.replace('\u{a0}', " "))
}

/// Parse ASCII or full-width decimal digits.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    s.chars().try_fold(0u32, |acc, c| {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_pads_month_and_day() {
        assert_eq!(date_key("12月1日(月)"), Some("12-01".to_string()));
        assert_eq!(date_key("1月9日(木)"), Some("01-09".to_string()));
        assert_eq!(date_key("10月21日(火)"), Some("10-21".to_string()));
    }

    #[test]
    fn test_date_key_matches_anywhere_in_line() {
        assert_eq!(
            date_key("【休講】 4月15日(火) 以下の授業"),
            Some("04-15".to_string())
        );
    }

    #[test]
    fn test_date_key_requires_weekday_annotation() {
        assert_eq!(date_key("12月1日"), None);
        assert_eq!(date_key("12月1日()"), None);
        assert_eq!(date_key("第1講時 数学 休講"), None);
    }

    #[test]
    fn test_date_key_full_width_digits() {
        assert_eq!(date_key("１２月３日(水)"), Some("12-03".to_string()));
    }

    #[test]
    fn test_date_key_rejects_other_digit_scripts() {
        // Arabic-Indic and Devanagari digits
        assert_eq!(date_key("١٢月١日(月)"), None);
        assert_eq!(date_key("१२月१日(月)"), None);
        assert_eq!(parse_digits("١٢"), None);
    }

    #[test]
    fn test_date_key_does_not_validate_calendar() {
        assert_eq!(date_key("13月45日(月)"), Some("13-45".to_string()));
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let lines = normalize_lines("休講のお知らせ\n\n12月1日(月)\n第1講時 数学 休講");
        assert_eq!(
            lines,
            vec![
                TaggedLine::new("12-01", "12月1日(月)"),
                TaggedLine::new("12-01", "第1講時 数学 休講"),
            ]
        );
    }

    #[test]
    fn test_whitespace_and_nbsp_cleanup() {
        let lines = normalize_lines("  12月1日(月)  \r\n\u{a0}\n第1講時\u{a0}数学\u{a0}休講\u{a0}\n   \n");
        assert_eq!(
            lines,
            vec![
                TaggedLine::new("12-01", "12月1日(月)"),
                TaggedLine::new("12-01", "第1講時 数学 休講"),
            ]
        );
    }

    #[test]
    fn test_no_header_yields_nothing() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("現在休講はありません\n第1講時 数学").is_empty());
    }

    #[test]
    fn test_every_key_has_mm_dd_shape() {
        let shape = Regex::new(r"^\d{2}-\d{2}$").unwrap();
        let raw = "x\n1月2日(金)\na\n11月30日(日)\nb\n3月4日(水) c\nd";
        let lines = normalize_lines(raw);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| shape.is_match(&l.date_key)));
    }

    #[test]
    fn test_repeated_header_reuses_key() {
        let lines = normalize_lines("12月1日(月)\nA\n12月2日(火)\nB\n12月1日(月)\nC");
        let keys: Vec<_> = lines.iter().map(|l| l.date_key.as_str()).collect();
        assert_eq!(keys, vec!["12-01", "12-01", "12-02", "12-02", "12-01", "12-01"]);
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("07"), Some(7));
        assert_eq!(parse_digits("１２"), Some(12));
        assert_eq!(parse_digits("1a"), None);
    }
}
