//! Free-form item listing parser
//!
//! Accepts one item per line as `name`, `quantity [x] name` or
//! `name[:] [x]quantity` (including tab separated). A line only matches when
//! its name resolves in the type catalog, which keeps item names that end in
//! digits intact.

use super::field_parsers::{clean_line, parse_quantity};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref QUANTITY_FIRST: Regex = Regex::new(r"^([\d,'\.]+)\s*[xX]?\s+([\S ]+)$")
        .expect("listing quantity-first pattern is valid");
    static ref QUANTITY_LAST: Regex = Regex::new(r"^([\S ]+?)[\s:]+[xX]?\s*([\d,'\.]+)$")
        .expect("listing quantity-last pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub items: Vec<ListingItem>,
    pub lines: Vec<usize>,
}

fn parse_listing_line(line: &str, context: &ParseContext<'_>) -> Option<ListingItem> {
    let resolves = |name: &str| context.types.has_type(name);

    if resolves(line) {
        return Some(ListingItem {
            name: line.to_string(),
            quantity: 1,
        });
    }

    if let Some(captures) = QUANTITY_FIRST.captures(line) {
        let name = captures[2].trim();
        if resolves(name) {
            return Some(ListingItem {
                name: name.to_string(),
                quantity: parse_quantity(&captures[1]),
            });
        }
    }

    if let Some(captures) = QUANTITY_LAST.captures(line) {
        let name = captures[1].trim();
        if resolves(name) {
            return Some(ListingItem {
                name: name.to_string(),
                quantity: parse_quantity(&captures[2]),
            });
        }
    }

    None
}

pub fn parse_listing(input: &Input, context: &ParseContext<'_>) -> (ParseResult, Input) {
    let mut listing = Listing::default();

    for (line_number, text) in input.iter() {
        let line = clean_line(text);
        if line.is_empty() {
            continue;
        }
        if let Some(item) = parse_listing_line(line, context) {
            listing.items.push(item);
            listing.lines.push(line_number);
        }
    }

    let rest = input.without(&listing.lines);
    (ParseResult::Listing(listing), rest)
}
