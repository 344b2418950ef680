//! Wallet export parser
//!
//! Market transaction lines carry an item and are itemized:
//! `date<TAB>quantity<TAB>type<TAB>price ISK<TAB>total ISK<TAB>client<TAB>where`.
//! Journal lines (`date<TAB>reference type<TAB>amount ISK<TAB>balance ISK<TAB>description`)
//! are recognised so they are not reported as unparsed, but carry no items.

use super::field_parsers::{MatchedLine, parse_isk, parse_quantity, regex_parse_lines};
use super::{Input, ParseContext, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRANSACTION_LINE: Regex = Regex::new(
        r"^(\d{4}\.\d{2}\.\d{2} \d{2}:\d{2}(?::\d{2})?)\t(-?[\d,'\.]+)\t([\S ]+)\t(-?[\d,'\.]+) ISK\t(-?[\d,'\.]+) ISK\t([\S ]*)\t([\S ]*)$"
    )
    .expect("wallet transaction pattern is valid");
    static ref JOURNAL_LINE: Regex = Regex::new(
        r"^(\d{4}\.\d{2}\.\d{2} \d{2}:\d{2}(?::\d{2})?)\t([\S ]+)\t(-?[\d,'\.]+) ISK\t(-?[\d,'\.]+) ISK\t?([\S ]*)$"
    )
    .expect("wallet journal pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub datetime: String,
    /// Units traded, with the sign of sales dropped
    pub quantity: i64,
    pub name: String,
    pub price: f64,
    pub total: f64,
    pub client: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletJournalEntry {
    pub datetime: String,
    pub reference_type: String,
    pub amount: f64,
    pub balance: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wallet {
    pub itemized_transactions: Vec<WalletTransaction>,
    pub journal_entries: Vec<WalletJournalEntry>,
    pub lines: Vec<usize>,
}

pub fn parse_wallet(input: &Input, _context: &ParseContext<'_>) -> (ParseResult, Input) {
    let (transactions, rest) = regex_parse_lines(&TRANSACTION_LINE, input);
    let (journal, rest) = regex_parse_lines(&JOURNAL_LINE, &rest);

    let mut lines: Vec<usize> = transactions
        .iter()
        .chain(journal.iter())
        .map(|m: &MatchedLine| m.line)
        .collect();
    lines.sort_unstable();

    let result = Wallet {
        itemized_transactions: transactions
            .iter()
            .map(|m| WalletTransaction {
                datetime: m.get(1).to_string(),
                quantity: parse_quantity(m.get(2).trim_start_matches('-')),
                name: m.get(3).to_string(),
                price: parse_isk(m.get(4)),
                total: parse_isk(m.get(5)),
                client: m.get(6).to_string(),
                location: m.get(7).to_string(),
            })
            .collect(),
        journal_entries: journal
            .iter()
            .map(|m| WalletJournalEntry {
                datetime: m.get(1).to_string(),
                reference_type: m.get(2).to_string(),
                amount: parse_isk(m.get(3)),
                balance: parse_isk(m.get(4)),
                description: m.get(5).to_string(),
            })
            .collect(),
        lines,
    };
    (ParseResult::Wallet(result), rest)
}
