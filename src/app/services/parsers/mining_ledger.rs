//! Personal mining ledger parser
//!
//! Lines are `date<TAB>ore<TAB>quantity<TAB>volume m3<TAB>[value ISK<TAB>]solar system`,
//! as copied from the ledger window. Older clients omit the value column.

use super::field_parsers::{matched_lines, parse_isk, parse_quantity, parse_volume, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEDGER_LINE: Regex = Regex::new(
        r"^(\d{4}\.\d{2}\.\d{2})\t([\S ]+)\t([\d,'\.]+)\t([\d,'\.]+ m3)(?:\t([\d,'\.]+ ISK))?\t([\S ]+)$"
    )
    .expect("mining ledger pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiningLedgerItem {
    pub date: String,
    pub name: String,
    pub quantity: i64,
    pub volume: f64,
    /// Estimated value at mining time, 0 when the column is absent
    pub estimated_value: f64,
    pub solar_system: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiningLedger {
    pub items: Vec<MiningLedgerItem>,
    pub lines: Vec<usize>,
}

pub fn parse_mining_ledger(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&LEDGER_LINE, input);

    let items = matches
        .iter()
        .map(|m| MiningLedgerItem {
            date: m.get(1).to_string(),
            name: m.get(2).to_string(),
            quantity: parse_quantity(m.get(3)),
            volume: parse_volume(m.get(4)),
            estimated_value: parse_isk(m.get(5)),
            solar_system: m.get(6).to_string(),
        })
        .collect();

    let result = MiningLedger {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::MiningLedger(result), rest)
}
