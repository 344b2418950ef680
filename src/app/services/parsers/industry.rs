//! Industry job materials parser
//!
//! The industry window copies its bill of materials as `name (quantity Units)`
//! with a singular `Unit` for one.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INDUSTRY_LINE: Regex = Regex::new(r"^([^\t()]+?) \(([\d,'\.]+) Units?\)$")
        .expect("industry pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndustryItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Industry {
    pub items: Vec<IndustryItem>,
    pub lines: Vec<usize>,
}

pub fn parse_industry(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&INDUSTRY_LINE, input);

    let items = matches
        .iter()
        .map(|m| IndustryItem {
            name: m.get(1).to_string(),
            quantity: parse_quantity(m.get(2)),
        })
        .collect();

    let result = Industry {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::Industry(result), rest)
}
