//! Inventory and hangar asset list parser
//!
//! Lines start with `name<TAB>quantity` followed by any number of detail
//! columns (group, category, size, slot, volume, meta level, tech level). An
//! empty quantity column means a single unstackable item.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ASSET_LINE: Regex = Regex::new(r"^([\S ]+)\t([\d,'\.]*)((?:\t[\S ]*)*)$")
        .expect("asset list pattern is valid");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetItem {
    pub name: String,
    pub quantity: i64,
    pub group: String,
    pub category: String,
    pub size: String,
    pub slot: String,
    pub volume: String,
    pub meta_level: String,
    pub tech_level: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetList {
    pub items: Vec<AssetItem>,
    pub lines: Vec<usize>,
}

pub fn parse_asset_list(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&ASSET_LINE, input);

    let items = matches
        .iter()
        .map(|m| {
            let quantity = match m.get(2) {
                "" => 1,
                token => parse_quantity(token),
            };
            let mut columns = m.get(3).split('\t').skip(1).map(str::trim);
            let mut next = || columns.next().unwrap_or("").to_string();

            AssetItem {
                name: m.get(1).to_string(),
                quantity,
                group: next(),
                category: next(),
                size: next(),
                slot: next(),
                volume: next(),
                meta_level: next(),
                tech_level: next(),
            }
        })
        .collect();

    let result = AssetList {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::AssetList(result), rest)
}
