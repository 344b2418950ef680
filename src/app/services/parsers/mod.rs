//! Format parsers for game-generated item text
//!
//! Each parser recognises one clipboard format produced by the game client,
//! consumes the lines it matches and hands the remainder to the next parser.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Quantity, ISK and volume tokens and line matching
//! - [`multi_parser`] - Runs every parser in priority order and classifies the input
//! - One module per format, each exposing a `parse_*` function with the
//!   [`Parser`] signature
//!
//! ## Usage
//!
//! ```rust
//! use appraisal_engine::app::services::parsers::{Input, ParseContext, multi_parser};
//! use appraisal_engine::app::services::type_catalog::InMemoryTypeCatalog;
//!
//! let types = InMemoryTypeCatalog::new();
//! let context = ParseContext::new(&types);
//! let parsed = multi_parser::classify(&Input::from_text("10 Tritanium"), &context).unwrap();
//! assert_eq!(parsed.kind, "cargo_scan");
//! ```

use crate::app::services::type_catalog::TypeCatalog;
use std::collections::BTreeMap;

pub mod asset_list;
pub mod cargo_scan;
pub mod contract;
pub mod dscan;
pub mod field_parsers;
pub mod fitting;
pub mod heuristic;
pub mod industry;
pub mod killmail;
pub mod listing;
pub mod loot_history;
pub mod mining_ledger;
pub mod multi_parser;
pub mod planetary;
pub mod survey_scan;
pub mod view_contents;
pub mod wallet;

#[cfg(test)]
pub mod tests;

// Re-export format results for convenience
pub use asset_list::{AssetItem, AssetList};
pub use cargo_scan::{CargoScan, CargoScanItem};
pub use contract::{Contract, ContractItem};
pub use dscan::{DScan, DScanItem};
pub use fitting::{Fitting, FittingItem};
pub use heuristic::{Heuristic, HeuristicItem};
pub use industry::{Industry, IndustryItem};
pub use killmail::{Killmail, KillmailInvolved, KillmailItem, KillmailVictim};
pub use listing::{Listing, ListingItem};
pub use loot_history::{LootHistory, LootItem};
pub use mining_ledger::{MiningLedger, MiningLedgerItem};
pub use multi_parser::{Classification, Composite};
pub use planetary::{PlanetaryInteraction, PlanetaryItem};
pub use survey_scan::{SurveyScan, SurveyScanItem};
pub use view_contents::{ViewContents, ViewContentsItem};
pub use wallet::{Wallet, WalletJournalEntry, WalletTransaction};

/// Input text split into numbered lines
///
/// Line numbers are 1-based and refer to the original text, so they stay
/// stable as parsers remove the lines they consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    lines: BTreeMap<usize, String>,
}

impl Input {
    /// Split text into numbered lines
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim_end_matches('\r').to_string()))
            .collect();
        Self { lines }
    }

    /// Iterate over (line number, text) in line order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(|(number, text)| (*number, text.as_str()))
    }

    /// Text of one line
    pub fn get(&self, line_number: usize) -> Option<&str> {
        self.lines.get(&line_number).map(String::as_str)
    }

    /// Remaining line numbers in order
    pub fn line_numbers(&self) -> Vec<usize> {
        self.lines.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copy of the input without the given lines
    pub fn without(&self, consumed: &[usize]) -> Self {
        let mut lines = self.lines.clone();
        for line_number in consumed {
            lines.remove(line_number);
        }
        Self { lines }
    }

    /// Consume the input into its line map
    pub fn into_lines(self) -> BTreeMap<usize, String> {
        self.lines
    }
}

/// Read-only data available to catalog-aware parsers
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    pub types: &'a dyn TypeCatalog,
}

impl<'a> ParseContext<'a> {
    pub fn new(types: &'a dyn TypeCatalog) -> Self {
        Self { types }
    }
}

/// A format parser: returns its result and the lines it did not consume
pub type Parser = fn(&Input, &ParseContext<'_>) -> (ParseResult, Input);

/// Every parser, in priority order
///
/// Earlier parsers see the input first and win classification ties.
pub const ALL_PARSERS: &[Parser] = &[
    killmail::parse_killmail,
    fitting::parse_fitting,
    loot_history::parse_loot_history,
    planetary::parse_planetary,
    view_contents::parse_view_contents,
    mining_ledger::parse_mining_ledger,
    wallet::parse_wallet,
    survey_scan::parse_survey_scan,
    contract::parse_contract,
    listing::parse_listing,
    asset_list::parse_asset_list,
    industry::parse_industry,
    cargo_scan::parse_cargo_scan,
    dscan::parse_dscan,
    heuristic::parse_heuristic,
];

/// Structured result of one parser, or the aggregate of several
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    AssetList(AssetList),
    CargoScan(CargoScan),
    Contract(Contract),
    DScan(DScan),
    Fitting(Fitting),
    Industry(Industry),
    Killmail(Killmail),
    Listing(Listing),
    LootHistory(LootHistory),
    MiningLedger(MiningLedger),
    PlanetaryInterfaceRoute(PlanetaryInteraction),
    SurveyScan(SurveyScan),
    ViewContents(ViewContents),
    Wallet(Wallet),
    Heuristic(Heuristic),
    Composite(Composite),
}

impl ParseResult {
    /// Format name reported as the appraisal kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssetList(_) => "assets",
            Self::CargoScan(_) => "cargo_scan",
            Self::Contract(_) => "contract",
            Self::DScan(_) => "dscan",
            Self::Fitting(_) => "eft",
            Self::Industry(_) => "industry",
            Self::Killmail(_) => "killmail",
            Self::Listing(_) => "listing",
            Self::LootHistory(_) => "loot_history",
            Self::MiningLedger(_) => "mining_ledger",
            Self::PlanetaryInterfaceRoute(_) => "pi",
            Self::SurveyScan(_) => "survey_scan",
            Self::ViewContents(_) => "view_contents",
            Self::Wallet(_) => "wallet",
            Self::Heuristic(_) => "heuristic",
            Self::Composite(_) => "multi",
        }
    }

    /// Line numbers consumed, in ascending order
    pub fn lines(&self) -> &[usize] {
        match self {
            Self::AssetList(r) => &r.lines,
            Self::CargoScan(r) => &r.lines,
            Self::Contract(r) => &r.lines,
            Self::DScan(r) => &r.lines,
            Self::Fitting(r) => &r.lines,
            Self::Industry(r) => &r.lines,
            Self::Killmail(r) => &r.lines,
            Self::Listing(r) => &r.lines,
            Self::LootHistory(r) => &r.lines,
            Self::MiningLedger(r) => &r.lines,
            Self::PlanetaryInterfaceRoute(r) => &r.lines,
            Self::SurveyScan(r) => &r.lines,
            Self::ViewContents(r) => &r.lines,
            Self::Wallet(r) => &r.lines,
            Self::Heuristic(r) => &r.lines,
            Self::Composite(r) => &r.lines,
        }
    }

    /// True when no line was consumed
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}
