//! Planetary interaction route and storage parser
//!
//! Lines are `Routed|Not Routed<TAB>commodity<TAB>quantity[<TAB>volume m3]`.

use super::field_parsers::{matched_lines, parse_quantity, parse_volume, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PI_LINE: Regex = Regex::new(
        r"^(Routed|Not Routed)\t([\S ]+)\t([\d,'\.]+)(?:\t([\d,'\.]+) m3)?$"
    )
    .expect("planetary pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetaryItem {
    pub name: String,
    pub quantity: i64,
    pub routed: bool,
    pub volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetaryInteraction {
    pub items: Vec<PlanetaryItem>,
    pub lines: Vec<usize>,
}

pub fn parse_planetary(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&PI_LINE, input);

    let items = matches
        .iter()
        .map(|m| PlanetaryItem {
            name: m.get(2).to_string(),
            quantity: parse_quantity(m.get(3)),
            routed: m.get(1) == "Routed",
            volume: parse_volume(m.get(4)),
        })
        .collect();

    let result = PlanetaryInteraction {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::PlanetaryInterfaceRoute(result), rest)
}
