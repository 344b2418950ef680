//! Field parsing utilities for pasted item text
//!
//! Helpers for quantities, ISK amounts and volumes written with the digit
//! grouping styles the game client produces, plus line matching against a
//! regular expression.

use super::Input;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DOT_GROUPED: Regex =
        Regex::new(r"^\d{1,3}(\.\d{3})+$").expect("dot grouping pattern is valid");
}

/// Parse a quantity token
///
/// Accepts `,` `'` and `.` as thousands separators. A token with a single
/// decimal point that is not a thousands group is truncated. Empty or
/// unparseable tokens give zero.
///
/// # Examples
/// ```
/// # use appraisal_engine::app::services::parsers::field_parsers::parse_quantity;
/// assert_eq!(parse_quantity("1,234"), 1234);
/// assert_eq!(parse_quantity("1'234'567"), 1234567);
/// assert_eq!(parse_quantity("1.234.567"), 1234567);
/// assert_eq!(parse_quantity("12.5"), 12);
/// ```
pub fn parse_quantity(token: &str) -> i64 {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '\'')
        .collect();

    if cleaned.is_empty() {
        return 0;
    }

    if DOT_GROUPED.is_match(&cleaned) {
        return cleaned.replace('.', "").parse().unwrap_or(0);
    }

    if let Ok(value) = cleaned.parse::<i64>() {
        return value;
    }

    cleaned
        .parse::<f64>()
        .map(|value| value.trunc() as i64)
        .unwrap_or(0)
}

/// Parse an ISK amount such as `-1,234,567.89`
pub fn parse_isk(token: &str) -> f64 {
    let cleaned: String = token
        .trim()
        .trim_end_matches("ISK")
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '\'')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Parse a volume such as `1,234.5 m3`
pub fn parse_volume(token: &str) -> f64 {
    parse_isk(token.trim().trim_end_matches("m3"))
}

/// A line matched by a regular expression
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedLine {
    /// 1-based line number
    pub line: usize,

    /// Capture groups; index 0 is the whole match and missing groups are empty
    pub captures: Vec<String>,
}

impl MatchedLine {
    /// Capture group text, empty when absent
    pub fn get(&self, index: usize) -> &str {
        self.captures.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Match every line of the input against a pattern
///
/// Lines are compared with surrounding spaces removed. Tabs are kept since
/// several formats carry empty tab-separated columns.
///
/// # Returns
/// The matched lines in line order, and the input without those lines
pub fn regex_parse_lines(pattern: &Regex, input: &Input) -> (Vec<MatchedLine>, Input) {
    let mut matches = Vec::new();
    let mut consumed = Vec::new();

    for (line_number, text) in input.iter() {
        if let Some(captures) = pattern.captures(clean_line(text)) {
            matches.push(MatchedLine {
                line: line_number,
                captures: captures
                    .iter()
                    .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect(),
            });
            consumed.push(line_number);
        }
    }

    (matches, input.without(&consumed))
}

/// Line numbers of a set of matches
pub fn matched_lines(matches: &[MatchedLine]) -> Vec<usize> {
    matches.iter().map(|m| m.line).collect()
}

/// Strip surrounding spaces and stray carriage returns
pub fn clean_line(text: &str) -> &str {
    text.trim_matches(|c: char| c == ' ' || c == '\r' || c == '\u{a0}')
}
