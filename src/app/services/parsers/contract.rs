//! Contract item list parser
//!
//! Lines are `name<TAB>quantity<TAB>type<TAB>category[<TAB>details]`. The
//! details column marks fitted items and blueprint copies with their runs.

use super::field_parsers::{matched_lines, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONTRACT_LINE: Regex = Regex::new(
        r"^([\S ]+)\t([\d,'\.]+)\t([\S ]+)\t([\S ]+)(?:\t([\S ]*))?$"
    )
    .expect("contract pattern is valid");
    static ref BPC_DETAILS: Regex =
        Regex::new(r"(?i)BLUEPRINT COPY(?:\s*-\s*Runs:\s*([\d,'\.]+))?")
            .expect("contract blueprint details pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractItem {
    pub name: String,
    pub quantity: i64,
    pub item_type: String,
    pub category: String,
    pub details: String,
    pub fitted: bool,
    pub bpc: bool,
    pub bpc_runs: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contract {
    pub items: Vec<ContractItem>,
    pub lines: Vec<usize>,
}

pub fn parse_contract(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (matches, rest) = regex_parse_lines(&CONTRACT_LINE, input);

    let items = matches
        .iter()
        .map(|m| {
            let details = m.get(5).trim();
            let (bpc, bpc_runs) = match BPC_DETAILS.captures(details) {
                Some(captures) => {
                    let runs = captures
                        .get(1)
                        .map(|runs| parse_quantity(runs.as_str()))
                        .unwrap_or(1);
                    (true, runs)
                }
                None => (false, 0),
            };

            ContractItem {
                name: m.get(1).to_string(),
                quantity: parse_quantity(m.get(2)),
                item_type: m.get(3).to_string(),
                category: m.get(4).to_string(),
                details: details.to_string(),
                fitted: details.eq_ignore_ascii_case("Fitted"),
                bpc,
                bpc_runs,
            }
        })
        .collect();

    let result = Contract {
        items,
        lines: matched_lines(&matches),
    };
    (ParseResult::Contract(result), rest)
}
