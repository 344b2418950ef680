//! Directional scanner result parser
//!
//! Lines are `[type id<TAB>]name<TAB>type<TAB>distance`, where distance is
//! `-` for objects without a known range. Every line counts as one item of
//! its type.

use super::field_parsers::{matched_lines, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DSCAN_LINE: Regex = Regex::new(
        r"^(?:(\d+)\t)?([^\t]*)\t([^\t]+)\t(-|[\d,'\.]+ (?:m|km|AU))$"
    )
    .expect("dscan pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct DScanItem {
    pub type_id: Option<i64>,
    pub label: String,
    pub name: String,
    pub distance: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DScan {
    pub items: Vec<DScanItem>,
    pub lines: Vec<usize>,
}

pub fn parse_dscan(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&DSCAN_LINE, input);

    let items = matches
        .iter()
        .map(|m| DScanItem {
            type_id: m.get(1).parse().ok(),
            label: m.get(2).to_string(),
            name: m.get(3).to_string(),
            distance: m.get(4).to_string(),
        })
        .collect();

    let result = DScan {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::DScan(result), rest)
}
