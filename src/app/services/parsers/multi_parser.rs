//! Multi-format classification
//!
//! Runs every registered parser in priority order, each against the lines the
//! earlier parsers left behind, and aggregates the non-empty results into a
//! [`Composite`]. The reported kind is the sub-result that consumed the most
//! non-blank lines, with ties going to the earlier parser.

use super::{ALL_PARSERS, Input, ParseContext, ParseResult, Parser};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregate of every parser that matched at least one line
///
/// The sub-results' line sets are disjoint since each parser only sees the
/// remainder of the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    pub results: Vec<ParseResult>,
    pub lines: Vec<usize>,
}

impl Composite {
    fn push(&mut self, result: ParseResult) {
        self.lines.extend_from_slice(result.lines());
        self.lines.sort_unstable();
        self.results.push(result);
    }
}

/// A classified input
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Always a [`ParseResult::Composite`]
    pub result: ParseResult,

    /// Name of the dominant format
    pub kind: String,

    /// Trimmed text of every non-blank line no parser consumed
    pub unparsed: BTreeMap<usize, String>,
}

/// Run the given parsers in order against a shrinking remainder
pub fn parse_with(
    parsers: &[Parser],
    input: &Input,
    context: &ParseContext<'_>,
) -> (Composite, Input) {
    let mut composite = Composite::default();
    let mut rest = input.clone();

    for parser in parsers {
        if rest.is_empty() {
            break;
        }
        let (result, remaining) = parser(&rest, context);
        if !result.is_empty() {
            debug!(
                "Parser '{}' consumed {} lines",
                result.name(),
                result.lines().len()
            );
            composite.push(result);
        }
        rest = remaining;
    }

    (composite, rest)
}

/// Run every registered parser in priority order
pub fn parse_all(input: &Input, context: &ParseContext<'_>) -> (Composite, Input) {
    parse_with(ALL_PARSERS, input, context)
}

/// Name of the sub-result with the most consumed non-blank lines
///
/// Blank lines swallowed inside a block (killmail sections, fitting racks)
/// carry no items and do not count.
///
/// # Errors
/// * Returns `Error::NoValidInput` when no sub-result consumed a non-blank line
pub fn find_kind(
    composite: &Composite,
    input: &Input,
    unparsed_lines: usize,
) -> Result<&'static str> {
    let mut kind = None;
    let mut largest = 0;

    for result in &composite.results {
        let count = payload_lines(result, input);
        if count > largest {
            largest = count;
            kind = Some(result.name());
        }
    }

    kind.ok_or_else(|| Error::no_valid_input(unparsed_lines))
}

/// Number of consumed lines holding any text
pub fn payload_lines(result: &ParseResult, input: &Input) -> usize {
    result
        .lines()
        .iter()
        .filter(|line_number| input.get(**line_number).is_some_and(|text| !is_blank(text)))
        .count()
}

fn is_blank(text: &str) -> bool {
    trim_line(text).is_empty()
}

fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r')
}

/// Trim the leftover lines and drop blank ones
pub fn filter_unparsed(rest: Input) -> BTreeMap<usize, String> {
    rest.into_lines()
        .into_iter()
        .filter_map(|(line_number, text)| {
            let trimmed = trim_line(&text);
            (!trimmed.is_empty()).then(|| (line_number, trimmed.to_string()))
        })
        .collect()
}

/// Parse and classify raw input
///
/// # Errors
/// * Returns `Error::NoValidInput` when no parser matched any line
pub fn classify(input: &Input, context: &ParseContext<'_>) -> Result<Classification> {
    let (composite, rest) = parse_all(input, context);
    let unparsed = filter_unparsed(rest);
    let kind = find_kind(&composite, input, unparsed.len())?;

    debug!(
        "Classified input as '{}' ({} formats, {} lines parsed, {} unparsed)",
        kind,
        composite.results.len(),
        composite.lines.len(),
        unparsed.len()
    );

    Ok(Classification {
        result: ParseResult::Composite(composite),
        kind: kind.to_string(),
        unparsed,
    })
}
