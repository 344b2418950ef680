//! Mining survey scanner result parser
//!
//! Lines are `ore name<TAB>quantity<TAB>distance`.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SURVEY_LINE: Regex =
        Regex::new(r"^([\S ]+)\t([\d,'\.]+)\t([\d,'\.]+ (?:m|km|AU))$")
            .expect("survey scan pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyScanItem {
    pub name: String,
    pub quantity: i64,
    pub distance: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyScan {
    pub items: Vec<SurveyScanItem>,
    pub lines: Vec<usize>,
}

pub fn parse_survey_scan(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&SURVEY_LINE, input);

    let items = matches
        .iter()
        .map(|m| SurveyScanItem {
            name: m.get(1).to_string(),
            quantity: parse_quantity(m.get(2)),
            distance: m.get(3).to_string(),
        })
        .collect();

    let result = SurveyScan {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::SurveyScan(result), rest)
}
