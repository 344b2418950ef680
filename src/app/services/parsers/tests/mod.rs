//! Shared test utilities and fixtures for parser tests

use crate::app::services::parsers::{Input, ParseContext, ParseResult, Parser};
use crate::app::services::type_catalog::InMemoryTypeCatalog;

pub use crate::app::services::type_catalog::tests::create_test_type_catalog;


/// Run one parser against text using the fixture catalog
pub fn run_parser(parser: Parser, text: &str) -> (ParseResult, Input) {
    let types = create_test_type_catalog();
    run_parser_with(parser, text, &types)
}

/// Run one parser against text using the given catalog
pub fn run_parser_with(
    parser: Parser,
    text: &str,
    types: &InMemoryTypeCatalog,
) -> (ParseResult, Input) {
    let context = ParseContext::new(types);
    parser(&Input::from_text(text), &context)
}

/// Sample EFT fitting block
pub const EFT_FIT: &str = "[Rifter, Budget Tackle]
Damage Control I
Overdrive Injector System I

[Empty Med slot]
Medium Shield Extender I
Warp Scrambler I /OFFLINE

125mm Gatling AutoCannon I, EMP S
125mm Gatling AutoCannon I, EMP S

Hobgoblin I x2";

/// Sample killmail
pub const KILLMAIL: &str = "2016.02.01 19:28:00

Victim: Unlucky Pilot
Corp: Hapless Industries
Alliance: None
Faction: None
Destroyed: Rifter
System: Jita
Security: 0.9
Damage Taken: 2,345

Involved parties:

Name: Sharp Shooter (laid the final blow)
Security: 5.0
Corp: Pirates Inc
Alliance: None
Faction: None
Ship: Thrasher
Weapon: 250mm Light Artillery Cannon II
Damage Done: 2,345

Destroyed items:

Medium Shield Extender I
EMP S, Qty: 200 (Cargo)

Dropped items:

Tritanium, Qty: 1,000 (Cargo)
Hobgoblin I, Qty: 2 (Drone Bay)";
