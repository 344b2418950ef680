//! Fleet loot history log parser
//!
//! Lines look like `20:45:13 Some Pilot has looted 1,000 x Tritanium`.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOOT_LINE: Regex =
        Regex::new(r"(\d\d:\d\d:\d\d) ([\S ]+) has looted ([\d,'\.]+) x ([\S ]+)$")
            .expect("loot history pattern is valid");
}

/// One looted stack
#[derive(Debug, Clone, PartialEq)]
pub struct LootItem {
    pub time: String,
    pub player_name: String,
    pub quantity: i64,
    pub name: String,
}

/// Parsed loot history, items ordered by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LootHistory {
    pub items: Vec<LootItem>,
    pub lines: Vec<usize>,
}

pub fn parse_loot_history(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&LOOT_LINE, input);

    let mut items: Vec<LootItem> = matches
        .iter()
        .map(|m| LootItem {
            time: m.get(1).to_string(),
            player_name: m.get(2).to_string(),
            quantity: parse_quantity(m.get(3)),
            name: m.get(4).to_string(),
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));

    let result = LootHistory {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::LootHistory(result), rest)
}
