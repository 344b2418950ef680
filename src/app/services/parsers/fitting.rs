//! EFT fitting block parser
//!
//! A block opens with `[Ship, Fitting Name]` and lists one module per line,
//! optionally followed by a loaded charge (`Module, Charge`) or a stack count
//! (`Drone x5`). Empty slot markers and blank rack separators belong to the
//! block. The block ends at the next header.

use super::field_parsers::{clean_line, parse_quantity};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

const OFFLINE_SUFFIX: &str = " /OFFLINE";

lazy_static! {
    static ref HEADER: Regex =
        Regex::new(r"^\[([^,\]]+),\s*([^\]]*)\]$").expect("fitting header pattern is valid");
    static ref EMPTY_SLOT: Regex =
        Regex::new(r"^\[[Ee]mpty [^\]]+\]$").expect("empty slot pattern is valid");
    static ref ITEM_LINE: Regex = Regex::new(
        r"^([^,\t\[\]]+?)(?: x([\d,'\.]+))?(?:,\s*([^,\t\[\]]+?))?$"
    )
    .expect("fitting item pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct FittingItem {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fitting {
    pub ship: String,
    pub name: String,
    pub items: Vec<FittingItem>,
    pub lines: Vec<usize>,
}

pub fn parse_fitting(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let mut fitting = Fitting::default();
    let mut in_block = false;

    for (line_number, text) in input.iter() {
        let line = clean_line(text);

        if !in_block {
            if let Some(captures) = HEADER.captures(line) {
                fitting.ship = captures[1].trim().to_string();
                fitting.name = captures[2].trim().to_string();
                fitting.lines.push(line_number);
                in_block = true;
            }
            continue;
        }

        if HEADER.is_match(line) {
            debug!("Second fitting header on line {}, ending block", line_number);
            break;
        }

        if line.is_empty() || EMPTY_SLOT.is_match(line) {
            fitting.lines.push(line_number);
            continue;
        }

        let line = line.strip_suffix(OFFLINE_SUFFIX).unwrap_or(line);
        if let Some(captures) = ITEM_LINE.captures(line) {
            let quantity = captures
                .get(2)
                .map(|m| parse_quantity(m.as_str()))
                .unwrap_or(1);
            fitting.items.push(FittingItem {
                name: captures[1].trim().to_string(),
                quantity,
            });
            if let Some(charge) = captures.get(3) {
                fitting.items.push(FittingItem {
                    name: charge.as_str().trim().to_string(),
                    quantity: 1,
                });
            }
            fitting.lines.push(line_number);
        }
    }

    if !in_block {
        return (ParseResult::Fitting(Fitting::default()), input.clone());
    }

    let rest = input.without(&fitting.lines);
    (ParseResult::Fitting(fitting), rest)
}
