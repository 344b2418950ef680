//! Container and ship "view contents" window parser
//!
//! Lines are `name<TAB>group<TAB>location<TAB>quantity`, where location is one
//! of the known ship bays or fitting slots.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use crate::constants::VIEW_CONTENTS_LOCATIONS;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VIEW_CONTENTS_LINE: Regex = {
        let locations = VIEW_CONTENTS_LOCATIONS
            .iter()
            .map(|location| regex::escape(location))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"^([\S ]+)\t([\S ]*)\t({})\t([\d,'\.]+)$",
            locations
        ))
        .expect("view contents pattern is valid")
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewContentsItem {
    pub name: String,
    pub group: String,
    pub location: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContents {
    pub items: Vec<ViewContentsItem>,
    pub lines: Vec<usize>,
}

pub fn parse_view_contents(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&VIEW_CONTENTS_LINE, input);

    let items = matches
        .iter()
        .map(|m| ViewContentsItem {
            name: m.get(1).to_string(),
            group: m.get(2).to_string(),
            location: m.get(3).to_string(),
            quantity: parse_quantity(m.get(4)),
        })
        .collect();

    let result = ViewContents {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::ViewContents(result), rest)
}
