//! Cargo scanner result parser
//!
//! Lines look like `1,000 Tritanium`. Blueprint copies carry a ` (Copy)`
//! suffix and are always single-run in this format.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

const COPY_SUFFIX: &str = " (Copy)";

lazy_static! {
    static ref CARGO_SCAN_LINE: Regex =
        Regex::new(r"^([\d,'\.]+) ([\S ]+)$").expect("cargo scan pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct CargoScanItem {
    pub name: String,
    pub quantity: i64,
    pub bpc: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CargoScan {
    pub items: Vec<CargoScanItem>,
    pub lines: Vec<usize>,
}

pub fn parse_cargo_scan(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&CARGO_SCAN_LINE, input);

    let items = matches
        .iter()
        .map(|m| {
            let raw_name = m.get(2).trim();
            let (name, bpc) = match raw_name.strip_suffix(COPY_SUFFIX) {
                Some(stripped) => (stripped, true),
                None => (raw_name, false),
            };
            CargoScanItem {
                name: name.to_string(),
                quantity: parse_quantity(m.get(1)),
                bpc,
            }
        })
        .collect();

    let result = CargoScan {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::CargoScan(result), rest)
}
