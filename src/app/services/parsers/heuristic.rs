//! Last-resort parser for lines no format claimed
//!
//! Looks for a known type name anywhere in the line, first as a whole
//! tab or wide-space separated column, then as the longest run of words,
//! and takes the first standalone number elsewhere on the line as the
//! quantity (default 1).

use super::field_parsers::{clean_line, parse_quantity};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Longest run of words tried as a type name
const MAX_NAME_WORDS: usize = 8;

lazy_static! {
    static ref COLUMN_SEPARATOR: Regex =
        Regex::new(r"\t| {2,}").expect("column separator pattern is valid");
    static ref QUANTITY_TOKEN: Regex = Regex::new(r"^[xX]?\s*([\d,'\.]*\d[\d,'\.]*)\s*[xX]?$")
        .expect("quantity token pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heuristic {
    pub items: Vec<HeuristicItem>,
    pub lines: Vec<usize>,
}

fn quantity_of(token: &str) -> Option<i64> {
    QUANTITY_TOKEN
        .captures(token.trim())
        .map(|captures| parse_quantity(&captures[1]))
        .filter(|quantity| *quantity > 0)
}

fn from_columns(line: &str, context: &ParseContext<'_>) -> Option<HeuristicItem> {
    let columns: Vec<&str> = COLUMN_SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|column| !column.is_empty())
        .collect();

    let name_index = columns
        .iter()
        .position(|column| context.types.has_type(column))?;
    let quantity = columns
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != name_index)
        .find_map(|(_, column)| quantity_of(column))
        .unwrap_or(1);

    Some(HeuristicItem {
        name: columns[name_index].to_string(),
        quantity,
    })
}

fn from_words(line: &str, context: &ParseContext<'_>) -> Option<HeuristicItem> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let longest = words.len().min(MAX_NAME_WORDS);

    for length in (1..=longest).rev() {
        for start in 0..=(words.len() - length) {
            let candidate = words[start..start + length].join(" ");
            if !context.types.has_type(&candidate) {
                continue;
            }

            let quantity = words
                .iter()
                .enumerate()
                .filter(|(index, _)| *index < start || *index >= start + length)
                .find_map(|(_, word)| quantity_of(word))
                .unwrap_or(1);

            return Some(HeuristicItem {
                name: candidate,
                quantity,
            });
        }
    }

    None
}

pub fn parse_heuristic(input: &Input, context: &ParseContext<'_>) -> (ParseResult, Input) {
    let mut heuristic = Heuristic::default();

    for (line_number, text) in input.iter() {
        let line = clean_line(text);
        if line.is_empty() {
            continue;
        }

        if let Some(item) = from_columns(line, context).or_else(|| from_words(line, context)) {
            heuristic.items.push(item);
            heuristic.lines.push(line_number);
        }
    }

    let rest = input.without(&heuristic.lines);
    (ParseResult::Heuristic(heuristic), rest)
}
